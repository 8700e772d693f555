use contracts::settings::FormSubmission;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlFormElement, HtmlInputElement, HtmlOptGroupElement, HtmlOptionElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

/// Snapshot the successful controls of `form`, in document order.
pub fn serialize_form(form: &HtmlFormElement) -> FormSubmission {
    let mut submission = FormSubmission::new();
    let controls = form.elements();
    for index in 0..controls.length() {
        if let Some(control) = controls.item(index).as_ref().and_then(ControlState::read) {
            control.collect(&mut submission);
        }
    }
    submission
}

/// Selected `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedOption {
    pub value: String,
    /// Set for the option itself or for its enclosing `<optgroup>`.
    pub disabled: bool,
}

/// The parts of a form control that decide what it submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlState {
    Input {
        kind: String,
        name: String,
        value: String,
        checked: bool,
        disabled: bool,
    },
    Select {
        name: String,
        disabled: bool,
        selected: Vec<SelectedOption>,
    },
    TextArea {
        name: String,
        value: String,
        disabled: bool,
    },
}

impl ControlState {
    /// `None` for elements that never submit anything (buttons, fieldsets, ...).
    pub fn read(element: &Element) -> Option<Self> {
        // `:disabled` also covers controls inside a disabled fieldset
        let disabled = element.matches(":disabled").unwrap_or(false);

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(ControlState::Input {
                kind: input.type_().to_ascii_lowercase(),
                name: input.name(),
                value: input.value(),
                checked: input.checked(),
                disabled,
            });
        }

        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            let options = select.selected_options();
            let selected = (0..options.length())
                .filter_map(|index| options.item(index))
                .filter_map(|o| o.dyn_into::<HtmlOptionElement>().ok())
                .map(|option| SelectedOption {
                    value: option.value(),
                    disabled: option.disabled() || in_disabled_group(&option),
                })
                .collect();
            return Some(ControlState::Select {
                name: select.name(),
                disabled,
                selected,
            });
        }

        element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|textarea| ControlState::TextArea {
                name: textarea.name(),
                value: textarea.value(),
                disabled,
            })
    }

    /// Append the pairs this control contributes to a form submission.
    ///
    /// Unnamed and disabled controls contribute nothing, neither do buttons
    /// and file inputs. Checkboxes and radios count only when checked; a
    /// select contributes one pair per selected, enabled option.
    pub fn collect(&self, submission: &mut FormSubmission) {
        match self {
            ControlState::Input {
                kind,
                name,
                value,
                checked,
                disabled,
            } => {
                if *disabled || name.is_empty() {
                    return;
                }
                match kind.as_str() {
                    "submit" | "button" | "reset" | "file" | "image" => {}
                    "checkbox" | "radio" => {
                        if *checked {
                            submission.push(name.as_str(), value.as_str());
                        }
                    }
                    _ => submission.push(name.as_str(), value.as_str()),
                }
            }
            ControlState::Select {
                name,
                disabled,
                selected,
            } => {
                if *disabled || name.is_empty() {
                    return;
                }
                for option in selected.iter().filter(|o| !o.disabled) {
                    submission.push(name.as_str(), option.value.as_str());
                }
            }
            ControlState::TextArea {
                name,
                value,
                disabled,
            } => {
                if !*disabled && !name.is_empty() {
                    submission.push(name.as_str(), value.as_str());
                }
            }
        }
    }
}

fn in_disabled_group(option: &HtmlOptionElement) -> bool {
    option
        .parent_element()
        .and_then(|parent| parent.dyn_into::<HtmlOptGroupElement>().ok())
        .is_some_and(|group| group.disabled())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(kind: &str, name: &str, value: &str) -> ControlState {
        ControlState::Input {
            kind: kind.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            checked: false,
            disabled: false,
        }
    }

    fn checked(control: ControlState) -> ControlState {
        match control {
            ControlState::Input {
                kind,
                name,
                value,
                disabled,
                ..
            } => ControlState::Input {
                kind,
                name,
                value,
                checked: true,
                disabled,
            },
            other => other,
        }
    }

    fn option(value: &str, disabled: bool) -> SelectedOption {
        SelectedOption {
            value: value.to_string(),
            disabled,
        }
    }

    fn encoded(controls: &[ControlState]) -> String {
        let mut submission = FormSubmission::new();
        for control in controls {
            control.collect(&mut submission);
        }
        submission.to_urlencoded()
    }

    #[test]
    fn test_text_like_inputs_submit_value() {
        assert_eq!(
            encoded(&[
                input("text", "key", "newval"),
                input("hidden", "csrfmiddlewaretoken", "abc"),
                input("password", "vcode", "x y"),
            ]),
            "key=newval&csrfmiddlewaretoken=abc&vcode=x+y"
        );
    }

    #[test]
    fn test_unnamed_controls_skipped() {
        assert_eq!(
            encoded(&[
                input("text", "", "orphan"),
                ControlState::TextArea {
                    name: String::new(),
                    value: "note".to_string(),
                    disabled: false,
                },
                input("text", "key", "v"),
            ]),
            "key=v"
        );
    }

    #[test]
    fn test_disabled_controls_skipped() {
        let disabled_input = ControlState::Input {
            kind: "text".to_string(),
            name: "key".to_string(),
            value: "v".to_string(),
            checked: false,
            disabled: true,
        };
        let disabled_select = ControlState::Select {
            name: "scope".to_string(),
            disabled: true,
            selected: vec![option("a", false)],
        };
        let disabled_textarea = ControlState::TextArea {
            name: "note".to_string(),
            value: "n".to_string(),
            disabled: true,
        };
        assert_eq!(
            encoded(&[disabled_input, disabled_select, disabled_textarea]),
            ""
        );
    }

    #[test]
    fn test_buttons_and_files_skipped() {
        let controls: Vec<ControlState> = ["submit", "button", "reset", "file", "image"]
            .iter()
            .map(|kind| input(kind, "action", "save"))
            .collect();
        assert_eq!(encoded(&controls), "");
    }

    #[test]
    fn test_checkboxes_and_radios_only_when_checked() {
        assert_eq!(
            encoded(&[
                input("checkbox", "enabled", "on"),
                checked(input("checkbox", "notify", "on")),
                input("radio", "mode", "public"),
                checked(input("radio", "mode", "private")),
            ]),
            "notify=on&mode=private"
        );
    }

    #[test]
    fn test_select_one_pair_per_enabled_option() {
        let select = ControlState::Select {
            name: "scope".to_string(),
            disabled: false,
            selected: vec![option("a", false), option("locked", true), option("b", false)],
        };
        assert_eq!(encoded(&[select]), "scope=a&scope=b");
    }

    #[test]
    fn test_textarea_line_breaks() {
        let textarea = ControlState::TextArea {
            name: "note".to_string(),
            value: "one\ntwo".to_string(),
            disabled: false,
        };
        assert_eq!(encoded(&[textarea]), "note=one%0D%0Atwo");
    }
}
