use std::fmt;
use std::str::FromStr;

/// The four operations selectable via `--operation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    Remove,
    FindById,
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Operation::List),
            "add" => Ok(Operation::Add),
            "remove" => Ok(Operation::Remove),
            "findById" => Ok(Operation::FindById),
            _ => Err(ParseOperationError {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::FindById => "findById",
        };
        f.write_str(name)
    }
}

/// Returned when an operation name does not match any wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperationError {
    pub name: String,
}

impl fmt::Display for ParseOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation: {}", self.name)
    }
}

impl std::error::Error for ParseOperationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_wire_names() {
        assert_eq!("list".parse::<Operation>().unwrap(), Operation::List);
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("remove".parse::<Operation>().unwrap(), Operation::Remove);
        assert_eq!("findById".parse::<Operation>().unwrap(), Operation::FindById);
    }

    #[test]
    fn test_rejects_unknown_names() {
        let err = "drop".parse::<Operation>().unwrap_err();
        assert_eq!(err.name, "drop");
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!("List".parse::<Operation>().is_err());
        assert!("findbyid".parse::<Operation>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for op in [
            Operation::List,
            Operation::Add,
            Operation::Remove,
            Operation::FindById,
        ] {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }
}
