use serde::{Deserialize, Serialize};

/// A fixed `(value, label)` pair used to populate a dropdown or radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A closed set of options with stable wire values and display labels.
///
/// Implemented by every select and radio enum through [`choice_enum!`].
pub trait Choice: Copy + PartialEq + 'static {
    /// Every variant in display order.
    const ALL: &'static [Self];

    /// Value submitted with the form.
    fn value(&self) -> &'static str;

    /// Human-readable label shown in the UI.
    fn label(&self) -> &'static str;

    /// Parse a submitted value. Matching is exact.
    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == value)
    }

    /// Option list for a select or radio widget.
    fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|c| SelectOption::new(c.value(), c.label()))
            .collect()
    }
}

/// Declare a [`Choice`] enum whose serde representation is the option value.
#[macro_export]
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
        $vis enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $crate::choice::Choice for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn value(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    choice_enum! {
        enum Size {
            Small => ("s", "Small"),
            Large => ("l", "Large"),
        }
    }

    #[test]
    fn from_value_is_exact() {
        assert_eq!(Size::from_value("s"), Some(Size::Small));
        assert_eq!(Size::from_value("S"), None);
        assert_eq!(Size::from_value(""), None);
    }

    #[test]
    fn options_preserve_declaration_order() {
        assert_eq!(
            Size::options(),
            vec![SelectOption::new("s", "Small"), SelectOption::new("l", "Large")]
        );
    }

    #[test]
    fn serde_uses_option_value() {
        assert_eq!(serde_json::to_string(&Size::Large).unwrap(), "\"l\"");
        let parsed: Size = serde_json::from_str("\"s\"").unwrap();
        assert_eq!(parsed, Size::Small);
    }
}
