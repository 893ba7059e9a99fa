use serde::Deserialize;
use validator::Validate;

use crate::domain::sort::SortField;
use crate::domain::types::RequestId;
use crate::forms::FormError;
use crate::table::TableEvent;

/// Body posted by a header or row control of the table.
#[derive(Debug, Deserialize, Validate)]
pub struct TableEventForm {
    #[validate(length(min = 1))]
    pub event: String,
    /// Sort field, set by header controls.
    pub field: Option<String>,
    /// Request id, set by row controls.
    #[validate(range(min = 1))]
    pub id: Option<i32>,
}

impl TableEventForm {
    /// Decodes an urlencoded form body.
    pub fn parse(body: &[u8]) -> Result<Self, FormError> {
        serde_html_form::from_bytes(body).map_err(|err| FormError::Malformed(err.to_string()))
    }

    fn request_id(&self) -> Result<RequestId, FormError> {
        let id = self.id.ok_or(FormError::MissingId)?;
        RequestId::new(id).map_err(|_| FormError::InvalidId)
    }
}

impl TryFrom<TableEventForm> for TableEvent {
    type Error = FormError;

    fn try_from(form: TableEventForm) -> Result<Self, Self::Error> {
        form.validate()?;

        match form.event.as_str() {
            "sort" => {
                let field = form.field.as_deref().ok_or(FormError::MissingField)?;
                let field = field
                    .parse::<SortField>()
                    .map_err(|_| FormError::InvalidField)?;
                Ok(TableEvent::Sort(field))
            }
            "view" => Ok(TableEvent::ViewDetails(form.request_id()?)),
            "update" => Ok(TableEvent::UpdateRequest(form.request_id()?)),
            "cancel" => Ok(TableEvent::CancelRequest(form.request_id()?)),
            other => Err(FormError::UnknownEvent(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Result<TableEvent, FormError> {
        TableEventForm::parse(body.as_bytes()).and_then(TableEvent::try_from)
    }

    #[test]
    fn sort_form_becomes_sort_event() {
        assert_eq!(
            decode("event=sort&field=created_at").unwrap(),
            TableEvent::Sort(SortField::CreatedAt)
        );
    }

    #[test]
    fn row_forms_carry_the_id() {
        let id = RequestId::new(7).unwrap();
        assert_eq!(decode("event=view&id=7").unwrap(), TableEvent::ViewDetails(id));
        assert_eq!(decode("event=update&id=7").unwrap(), TableEvent::UpdateRequest(id));
        assert_eq!(decode("id=7&event=cancel").unwrap(), TableEvent::CancelRequest(id));
    }

    #[test]
    fn invalid_forms_are_rejected() {
        assert!(matches!(decode("event=sort"), Err(FormError::MissingField)));
        assert!(matches!(
            decode("event=sort&field=note"),
            Err(FormError::InvalidField)
        ));
        assert!(matches!(decode("event=cancel"), Err(FormError::MissingId)));
        assert!(matches!(
            decode("event=cancel&id=0"),
            Err(FormError::Validation(_))
        ));
        assert!(matches!(
            decode("event=archive&id=3"),
            Err(FormError::UnknownEvent(event)) if event == "archive"
        ));
        assert!(matches!(decode("event="), Err(FormError::Validation(_))));
        assert!(matches!(
            decode("event=view&id=abc"),
            Err(FormError::Malformed(_))
        ));
    }
}
