//! The ordered, fixed-size question list the display cycles through.

/// Ordered list of questions, addressed by a cyclic index.
#[derive(Debug, Clone)]
pub struct QuestionList {
    questions: Vec<String>,
}

impl QuestionList {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    /// Parse a JSON array of strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let questions: Vec<String> = serde_json::from_str(json)?;
        Ok(Self { questions })
    }

    /// The question set of the original Franklinstrasse installation.
    pub fn default_set() -> Self {
        Self::new(
            [
                "Was befindet sich auf der anderen Seite dieses Portals?",
                "Was machst du auf dieser Straße?",
                "Tritt in dieses Portal der Franklinstraße ein.",
                "Schau nach oben!",
                "Was befindet sich unter den Bänken?",
                "Wie kann die Franklinstraße zu einem Spielplatz werden?",
                "Wie viel Zeit verbringst du hier?",
                "Wie fühlst du dich auf dieser Straße?",
                "Wenn du etwas an dieser Straße ändern könntest, was wäre das?",
                "Wie möchtest du hier auf der Franklinstraße Zeit verbringen?",
                "Tritt in dieses Portal ein und verändere eine Sache an der Franklinstraße.",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }

    /// Question at a cyclic index. Panics on an empty list; the sequencer
    /// refuses to start without questions.
    pub fn get(&self, index: usize) -> &str {
        &self.questions[index % self.questions.len()]
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionList {
    fn default() -> Self {
        Self::default_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_questions() {
        let json = r#"["Wohin führt das?", "Warum hier?"]"#;
        let list = QuestionList::from_json(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1), "Warum hier?");
    }

    #[test]
    fn get_wraps_around() {
        let list = QuestionList::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(list.get(0), "a");
        assert_eq!(list.get(4), "b"); // 4 % 3 = 1
    }

    #[test]
    fn default_set_is_populated() {
        let list = QuestionList::default_set();
        assert_eq!(list.len(), 11);
        assert_eq!(list.get(3), "Schau nach oben!");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(QuestionList::from_json("not json").is_err());
    }
}
