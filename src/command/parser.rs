//! Verb/object tokenizing for typed commands

/// Recognized verbs after alias folding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Go,
    Take,
    Use,
    Inventory,
    Help,
    Escape,
    Look,
    /// Anything not in the alias table, kept verbatim for the reply
    Unknown(String),
}

impl Verb {
    /// Fold an already-lowercased word through the alias table
    pub fn from_word(word: &str) -> Self {
        match word {
            "go" | "g" => Verb::Go,
            "take" | "t" => Verb::Take,
            "use" | "u" => Verb::Use,
            "inventory" | "i" | "inv" => Verb::Inventory,
            "help" | "h" => Verb::Help,
            "escape" => Verb::Escape,
            "look" | "l" | "examine" | "x" => Verb::Look,
            other => Verb::Unknown(other.to_string()),
        }
    }
}

/// A tokenized command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub verb: Verb,
    /// Remaining words joined with single spaces
    pub object: String,
}

/// Split lowercased input into verb and object. Returns None for blank input.
pub fn parse(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace();
    let verb = Verb::from_word(words.next()?);
    let object = words.collect::<Vec<_>>().join(" ");
    Some(ParsedCommand { verb, object })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank() {
        assert!(parse("").is_none());
        assert!(parse("   \t ").is_none());
    }

    #[test]
    fn test_parse_rejoins_object() {
        let cmd = parse("take   crumpled employee   discount voucher").unwrap();
        assert_eq!(cmd.verb, Verb::Take);
        assert_eq!(cmd.object, "crumpled employee discount voucher");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Verb::from_word("g"), Verb::Go);
        assert_eq!(Verb::from_word("inv"), Verb::Inventory);
        assert_eq!(Verb::from_word("x"), Verb::Look);
        assert_eq!(Verb::from_word("u"), Verb::Use);
        assert_eq!(Verb::from_word("dance"), Verb::Unknown("dance".into()));
    }

    #[test]
    fn test_verb_only() {
        let cmd = parse("inventory").unwrap();
        assert_eq!(cmd.verb, Verb::Inventory);
        assert!(cmd.object.is_empty());
    }
}
