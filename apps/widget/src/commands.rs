use booking_form_cell::{FieldId, WidgetEvent};
use shared_models::AppError;

pub const HELP: &str = "\
Commands:
  set <field> <value>   fields: name phone address doctor service date time notes
  submit                book the appointment
  scroll <offset>       report the page scroll position
  top                   press the back-to-top control
  show                  print the current form
  help | quit";

#[derive(Debug, PartialEq)]
pub enum Command {
    Event(WidgetEvent),
    Show,
    Help,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Command::Event(WidgetEvent::FieldChanged {
                    field: field.parse::<FieldId>()?,
                    value: value.trim().to_string(),
                })
            }
            "submit" => Command::Event(WidgetEvent::Submit),
            "scroll" => {
                let offset = rest
                    .parse::<f64>()
                    .map_err(|_| AppError::Validation(format!("Not a scroll offset: {}", rest)))?;
                Command::Event(WidgetEvent::Scrolled(offset))
            }
            "top" => Command::Event(WidgetEvent::ScrollTopActivated),
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(AppError::Validation(format!("Unknown command: {}", other))),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_spaces_in_value() {
        assert_eq!(
            Command::parse("set address 12 Lake Road").unwrap(),
            Command::Event(WidgetEvent::FieldChanged {
                field: FieldId::Address,
                value: "12 Lake Road".to_string(),
            })
        );
    }

    #[test]
    fn set_without_value_clears_field() {
        assert_eq!(
            Command::parse("set notes").unwrap(),
            Command::Event(WidgetEvent::FieldChanged {
                field: FieldId::Notes,
                value: String::new(),
            })
        );
    }

    #[test]
    fn scroll_needs_a_number() {
        assert_eq!(
            Command::parse("scroll 350").unwrap(),
            Command::Event(WidgetEvent::Scrolled(350.0))
        );
        assert!(Command::parse("scroll down").is_err());
    }

    #[test]
    fn unknown_input_is_rejected() {
        assert!(Command::parse("book now").is_err());
        assert!(Command::parse("set colour blue").is_err());
        assert_eq!(Command::parse("   ").unwrap(), Command::Empty);
    }
}
