use serde::{Deserialize, Serialize};

/// Internal name reserved by SharePoint for the primary column of every list.
pub const PRIMARY_COLUMN_NAME: &str = "Title";

/// Type discriminator flags as reported by the collaborator.
///
/// At most one is expected to be set, but nothing enforces it; [`ColumnType`]
/// resolves overlaps by fixed priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnKindFlags {
    #[serde(default)]
    pub text: bool,
    #[serde(default)]
    pub date_time: bool,
    #[serde(default)]
    pub number: bool,
    #[serde(default)]
    pub boolean: bool,
    #[serde(default)]
    pub choice: bool,
}

/// One column of a SharePoint list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub id: String,
    /// Internal name. This is the value integrations must use.
    pub name: String,
    pub display_name: String,
    pub required: bool,
    pub read_only: bool,
    pub kind: ColumnKindFlags,
}

impl ColumnDescriptor {
    pub fn role(&self) -> ColumnRole {
        ColumnRole::classify(&self.name, self.read_only)
    }

    pub fn column_type(&self) -> ColumnType {
        ColumnType::from_flags(&self.kind)
    }
}

/// Classification badge of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Primary,
    System,
    Data,
}

impl ColumnRole {
    /// Primary beats System beats Data.
    pub fn classify(internal_name: &str, read_only: bool) -> Self {
        if internal_name == PRIMARY_COLUMN_NAME {
            ColumnRole::Primary
        } else if read_only {
            ColumnRole::System
        } else {
            ColumnRole::Data
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColumnRole::Primary => "Primária",
            ColumnRole::System => "Sistema",
            ColumnRole::Data => "Dados",
        }
    }
}

/// Display type of a column, derived from [`ColumnKindFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Text,
    DateTime,
    Number,
    Boolean,
    Choice,
    Custom,
}

impl ColumnType {
    /// First set flag wins, checked in the order text, dateTime, number,
    /// boolean, choice. No flag set means a custom column type.
    pub fn from_flags(flags: &ColumnKindFlags) -> Self {
        if flags.text {
            ColumnType::Text
        } else if flags.date_time {
            ColumnType::DateTime
        } else if flags.number {
            ColumnType::Number
        } else if flags.boolean {
            ColumnType::Boolean
        } else if flags.choice {
            ColumnType::Choice
        } else {
            ColumnType::Custom
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Text => "Texto",
            ColumnType::DateTime => "Data/Hora",
            ColumnType::Number => "Número",
            ColumnType::Boolean => "Booleano",
            ColumnType::Choice => "Escolha",
            ColumnType::Custom => "Personalizado",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_priority() {
        assert_eq!(ColumnRole::classify("Title", false), ColumnRole::Primary);
        // Title wins even when read-only
        assert_eq!(ColumnRole::classify("Title", true), ColumnRole::Primary);
        assert_eq!(ColumnRole::classify("Created", true), ColumnRole::System);
        assert_eq!(ColumnRole::classify("Status", false), ColumnRole::Data);
    }

    #[test]
    fn test_role_match_is_exact() {
        assert_eq!(ColumnRole::classify("title", false), ColumnRole::Data);
        assert_eq!(ColumnRole::classify("Title0", false), ColumnRole::Data);
        assert_eq!(ColumnRole::classify(" Title", true), ColumnRole::System);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(ColumnRole::Primary.label(), "Primária");
        assert_eq!(ColumnRole::System.label(), "Sistema");
        assert_eq!(ColumnRole::Data.label(), "Dados");
    }

    #[test]
    fn test_type_single_flags() {
        let cases = [
            (ColumnKindFlags { text: true, ..Default::default() }, "Texto"),
            (ColumnKindFlags { date_time: true, ..Default::default() }, "Data/Hora"),
            (ColumnKindFlags { number: true, ..Default::default() }, "Número"),
            (ColumnKindFlags { boolean: true, ..Default::default() }, "Booleano"),
            (ColumnKindFlags { choice: true, ..Default::default() }, "Escolha"),
            (ColumnKindFlags::default(), "Personalizado"),
        ];

        for (flags, expected) in cases {
            assert_eq!(ColumnType::from_flags(&flags).label(), expected);
        }
    }

    #[test]
    fn test_type_priority_with_overlapping_flags() {
        let all = ColumnKindFlags {
            text: true,
            date_time: true,
            number: true,
            boolean: true,
            choice: true,
        };
        assert_eq!(ColumnType::from_flags(&all), ColumnType::Text);

        let later = ColumnKindFlags {
            boolean: true,
            choice: true,
            number: true,
            ..Default::default()
        };
        assert_eq!(ColumnType::from_flags(&later), ColumnType::Number);
    }

    #[test]
    fn test_type_is_total_over_all_flag_combinations() {
        for bits in 0u8..32 {
            let flags = ColumnKindFlags {
                text: bits & 1 != 0,
                date_time: bits & 2 != 0,
                number: bits & 4 != 0,
                boolean: bits & 8 != 0,
                choice: bits & 16 != 0,
            };
            let expected = match bits.trailing_zeros() {
                0 => ColumnType::Text,
                1 => ColumnType::DateTime,
                2 => ColumnType::Number,
                3 => ColumnType::Boolean,
                4 => ColumnType::Choice,
                _ => ColumnType::Custom,
            };
            assert_eq!(ColumnType::from_flags(&flags), expected, "bits={bits:05b}");
        }
    }
}
