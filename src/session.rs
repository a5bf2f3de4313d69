use crate::charset::{CharacterClass, CharacterClassSelection};
use crate::config::GeneratorConfig;
use crate::generator::generate_password_with;
use crate::strength::{score_strength, StrengthAssessment};
use crate::{Error, Result};
use log::{debug, warn};
use rand::Rng;
use serde::Serialize;

/// A password together with the assessment computed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated {
    password: String,
    #[serde(flatten)]
    assessment: StrengthAssessment,
}

impl Generated {
    pub fn new(password: String) -> Self {
        let assessment = score_strength(&password);
        Self {
            password,
            assessment,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn assessment(&self) -> StrengthAssessment {
        self.assessment
    }
}

/// Holds the toggle state and the last successfully generated password.
///
/// A refused request (no class selected, length out of range) leaves the
/// previous password and assessment in place.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    config: GeneratorConfig,
    length: usize,
    selection: CharacterClassSelection,
    current: Option<Generated>,
}

impl PasswordGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            length: config.default_length,
            selection: config.classes,
            config,
            current: None,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: usize) -> Result<()> {
        self.config.check_length(length)?;
        self.length = length;
        Ok(())
    }

    pub fn selection(&self) -> CharacterClassSelection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: CharacterClassSelection) {
        self.selection = selection;
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        self.selection.set(class, enabled);
    }

    pub fn current(&self) -> Option<&Generated> {
        self.current.as_ref()
    }

    /// Assessment to show before anything has been generated.
    pub fn initial_assessment(&self) -> StrengthAssessment {
        score_strength("")
    }

    pub fn generate(&mut self) -> Result<&Generated> {
        self.generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R>(&mut self, rng: &mut R) -> Result<&Generated>
    where
        R: Rng + ?Sized,
    {
        if self.selection.is_empty() {
            warn!("refusing to generate: no character class selected");
            return Err(Error::NoCharacterClassSelected);
        }

        let generated = Generated::new(generate_password_with(rng, self.length, self.selection));
        debug!(
            "generated password of length {} ({})",
            self.length, generated.assessment.label
        );

        let generated = self.current.insert(generated);
        Ok(&*generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::{StrengthLabel, SCORE_FLOOR};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn generator() -> PasswordGenerator {
        PasswordGenerator::new(GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn test_new_uses_config_defaults() {
        let config = GeneratorConfig {
            default_length: 20,
            classes: CharacterClassSelection::only(CharacterClass::Digits),
            ..GeneratorConfig::default()
        };
        let generator = PasswordGenerator::new(config).unwrap();

        assert_eq!(generator.length(), 20);
        assert_eq!(
            generator.selection(),
            CharacterClassSelection::only(CharacterClass::Digits)
        );
        assert!(generator.current().is_none());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GeneratorConfig {
            min_length: 10,
            max_length: 5,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            PasswordGenerator::new(config),
            Err(Error::InvalidLengthBounds { .. })
        ));
    }

    #[test]
    fn test_initial_assessment() {
        let assessment = generator().initial_assessment();
        assert_eq!(assessment.label, StrengthLabel::Weak);
        assert_eq!(assessment.score, SCORE_FLOOR);
    }

    #[test]
    fn test_generate_scores_the_new_password() {
        let mut generator = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for length in [4, 8, 16, 32] {
            generator.set_length(length).unwrap();
            let generated = generator.generate_with(&mut rng).unwrap().clone();

            assert_eq!(generated.password().chars().count(), length);
            assert_eq!(generated.assessment(), score_strength(generated.password()));
            assert_eq!(generator.current(), Some(&generated));
        }
    }

    #[test]
    fn test_generate_without_classes_keeps_previous_result() {
        let mut generator = generator();
        let previous = generator.generate().unwrap().clone();

        generator.set_selection(CharacterClassSelection::NONE);
        let result = generator.generate();
        assert!(matches!(result, Err(Error::NoCharacterClassSelected)));
        assert_eq!(generator.current(), Some(&previous));

        generator.set_class(CharacterClass::Lowercase, true);
        let next = generator.generate().unwrap();
        assert!(next.password().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_without_classes_before_first_password() {
        let mut generator = generator();
        generator.set_selection(CharacterClassSelection::NONE);

        assert!(generator.generate().is_err());
        assert!(generator.current().is_none());
    }

    #[test]
    fn test_set_length_out_of_range_keeps_previous_length() {
        let mut generator = generator();
        generator.set_length(16).unwrap();

        assert!(matches!(
            generator.set_length(2),
            Err(Error::LengthOutOfRange { length: 2, min: 4, max: 32 })
        ));
        assert!(generator.set_length(100).is_err());
        assert_eq!(generator.length(), 16);
    }

    #[test]
    fn test_generated_serializes_flat() {
        let generated = Generated::new("Abcdefg1!".to_string());
        let value = serde_json::to_value(&generated).unwrap();

        assert_eq!(value["password"], "Abcdefg1!");
        assert_eq!(value["score"], 78);
        assert_eq!(value["raw_score"], 78);
        assert_eq!(value["label"], "Strong");
    }
}
