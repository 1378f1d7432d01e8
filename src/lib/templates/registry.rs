//! Module with the definitions of meme templates.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json;

use model::Position;
use super::error::TemplateError;


/// Named preset of captions to draw over the template's base image.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TemplateDefinition {
    pub name: String,
    /// Default caption texts, in the order they are drawn.
    #[serde(alias = "template_text")]
    pub captions: Vec<String>,
    /// Position of each caption.
    pub positions: Vec<Position>,
}

impl TemplateDefinition {
    pub fn new<N, I, S>(name: N, captions: I, positions: Vec<Position>) -> Self
        where N: Into<String>, I: IntoIterator<Item=S>, S: Into<String>
    {
        TemplateDefinition{
            name: name.into(),
            captions: captions.into_iter().map(Into::into).collect(),
            positions,
        }
    }

    /// Check that there is a position for every caption.
    pub fn validate(&self) -> Result<(), TemplateError> {
        self.check_count(self.captions.len())
    }

    /// Check that given number of texts matches the template's positions.
    pub fn check_count(&self, count: usize) -> Result<(), TemplateError> {
        if count != self.positions.len() {
            return Err(TemplateError::CaptionCount{
                template: self.name.clone(),
                expected: self.positions.len(),
                actual: count,
            });
        }
        Ok(())
    }
}

impl fmt::Display for TemplateDefinition {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} (", self.name)?;
        for (i, (text, position)) in self.captions.iter().zip(&self.positions).enumerate() {
            if i > 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "{:?} at {}", text, position)?;
        }
        write!(fmt, ")")
    }
}


lazy_static! {
    static ref BUILTIN_TEMPLATES: Vec<TemplateDefinition> = vec![
        TemplateDefinition::new("Drake", vec!["Ні", "Так"],
            vec![Position::Top, Position::Bottom]),
        TemplateDefinition::new("Distracted Boyfriend", vec!["Мені", "Спокуса", "Моя задача"],
            vec![Position::Bottom, Position::Bottom, Position::Bottom]),
        TemplateDefinition::new("Two Buttons", vec!["Кнопка 1", "Кнопка 2", "Напружена людина"],
            vec![Position::Top, Position::Top, Position::Bottom]),
    ];
}


/// Collection of template definitions, keeping the order they were added in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: Vec<TemplateDefinition>,
}

impl TemplateRegistry {
    /// Create a registry without any templates.
    #[inline]
    pub fn empty() -> Self {
        TemplateRegistry{templates: vec![]}
    }

    /// Create a registry with the built-in templates.
    #[inline]
    pub fn builtin() -> Self {
        TemplateRegistry{templates: BUILTIN_TEMPLATES.clone()}
    }

    /// Read the registry from a JSON array of template definitions.
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let definitions: Vec<TemplateDefinition> = serde_json::from_str(json)?;
        let mut registry = Self::empty();
        for definition in definitions {
            registry.insert(definition)?;
        }
        debug!("Read {} template definition(s) from JSON", registry.len());
        Ok(registry)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRegistry {
    /// Add a template, replacing any other with the same name.
    pub fn insert(&mut self, definition: TemplateDefinition) -> Result<(), TemplateError> {
        definition.validate()?;
        match self.templates.iter().position(|t| t.name == definition.name) {
            Some(i) => self.templates[i] = definition,
            None => self.templates.push(definition),
        }
        Ok(())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&TemplateDefinition> {
        self.templates.iter().find(|t| t.name == name)
    }

    #[inline]
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    #[inline]
    pub fn iter(&self) -> ::std::slice::Iter<TemplateDefinition> {
        self.templates.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Pick one of the templates uniformly at random.
    #[inline]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&TemplateDefinition> {
        self.templates.choose(rng)
    }
}


#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use spectral::prelude::*;

    use model::Position;
    use super::super::error::TemplateError;
    use super::{TemplateDefinition, TemplateRegistry};

    #[test]
    fn builtin_templates() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(vec!["Drake", "Distracted Boyfriend", "Two Buttons"], registry.names());
        for definition in registry.iter() {
            assert_that!(definition.validate()).is_ok();
        }

        let drake = registry.get("Drake").unwrap();
        assert_eq!(vec!["Ні".to_owned(), "Так".to_owned()], drake.captions);
        assert_eq!(vec![Position::Top, Position::Bottom], drake.positions);
        assert!(registry.get("drake").is_none());
    }

    #[test]
    fn from_json() {
        let registry = TemplateRegistry::from_json(r#"[
            {"name": "Solo", "captions": ["Just me"], "positions": ["middle"]},
            {"name": "Legacy", "template_text": ["A", "B"], "positions": ["top", "bottom"]}
        ]"#);
        assert_that!(registry.map(|r| r.len())).is_ok().is_equal_to(2);
    }

    #[test]
    fn from_json_mismatch() {
        let result = TemplateRegistry::from_json(r#"[
            {"name": "Broken", "captions": ["A"], "positions": ["top", "bottom"]}
        ]"#);
        assert_that!(result).is_err().is_equal_to(TemplateError::CaptionCount{
            template: "Broken".into(), expected: 2, actual: 1,
        });
    }

    #[test]
    fn from_json_garbage() {
        assert_that!(TemplateRegistry::from_json("{}").is_err()).is_true();
        assert_that!(TemplateRegistry::from_json(
            r#"[{"name": "X", "captions": [], "positions": ["left"]}]"#).is_err()).is_true();
    }

    #[test]
    fn insert_replaces() {
        let mut registry = TemplateRegistry::builtin();
        registry.insert(TemplateDefinition::new("Drake", vec!["No"], vec![Position::Middle]))
            .unwrap();
        assert_eq!(3, registry.len());
        assert_eq!(vec![Position::Middle], registry.get("Drake").unwrap().positions);
    }

    #[test]
    fn choose() {
        let registry = TemplateRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let name = &registry.choose(&mut rng).unwrap().name;
            assert!(registry.get(name).is_some());
        }
        assert!(TemplateRegistry::empty().choose(&mut rng).is_none());
    }

    #[test]
    fn display() {
        let definition = TemplateDefinition::new("T", vec!["a", "b"],
            vec![Position::Top, Position::Bottom]);
        assert_eq!(r#"T ("a" at top, "b" at bottom)"#, format!("{}", definition));
    }
}
