//! Structural validation of provider output
//!
//! Raw records keep every field optional so one malformed item never fails the
//! whole payload; items are checked and discarded one by one.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ContentError;
use crate::domain::{Domain, OPTIONS_PER_QUESTION, Question};

/// Question as returned by a provider, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Domain as returned by a provider, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDomain {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub subdomains: Option<Vec<String>>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl RawQuestion {
    /// Check the shape, returning the reason it is unusable
    pub fn validate(&self) -> Result<Question, String> {
        let (Some(question), Some(correct_answer), Some(explanation), Some(hint)) = (
            non_empty(&self.question),
            non_empty(&self.correct_answer),
            non_empty(&self.explanation),
            non_empty(&self.hint),
        ) else {
            return Err("missing fields".to_string());
        };

        let options = self.options.as_deref().unwrap_or_default();
        if options.len() != OPTIONS_PER_QUESTION {
            return Err(format!(
                "expected {} options, got {}",
                OPTIONS_PER_QUESTION,
                options.len()
            ));
        }
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err("empty option".to_string());
        }
        if !options.iter().any(|o| o == correct_answer) {
            return Err(format!(
                "correct answer \"{}\" is not among the options",
                correct_answer
            ));
        }

        Ok(Question {
            question: question.to_string(),
            options: options.to_vec(),
            correct_answer: correct_answer.to_string(),
            explanation: explanation.to_string(),
            hint: hint.to_string(),
        })
    }
}

impl RawDomain {
    /// Check the shape, returning the reason it is unusable
    pub fn validate(&self) -> Result<Domain, String> {
        let (Some(name), Some(description), Some(icon)) = (
            non_empty(&self.name),
            non_empty(&self.description),
            non_empty(&self.icon),
        ) else {
            return Err("missing fields".to_string());
        };

        let subdomains: Vec<String> = self
            .subdomains
            .iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if subdomains.is_empty() {
            return Err("no subdomains".to_string());
        }

        Ok(Domain {
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            subdomains,
        })
    }
}

/// Keep the well-formed questions; fail only if none survive
pub fn validate_questions(raw: &[RawQuestion]) -> Result<Vec<Question>, ContentError> {
    let mut valid = Vec::with_capacity(raw.len());
    for (index, item) in raw.iter().enumerate() {
        match item.validate() {
            Ok(question) => valid.push(question),
            Err(reason) => warn!("Discarding question #{}: {}", index + 1, reason),
        }
    }

    if valid.is_empty() {
        return Err(ContentError::NoValidQuestions {
            discarded: raw.len(),
        });
    }
    Ok(valid)
}

/// Keep the well-formed domains; fail only if none survive
pub fn validate_domains(raw: &[RawDomain]) -> Result<Vec<Domain>, ContentError> {
    let mut valid = Vec::with_capacity(raw.len());
    for (index, item) in raw.iter().enumerate() {
        match item.validate() {
            Ok(domain) => valid.push(domain),
            Err(reason) => warn!("Discarding domain #{}: {}", index + 1, reason),
        }
    }

    if valid.is_empty() {
        return Err(ContentError::NoValidDomains {
            discarded: raw.len(),
        });
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(options: &[&str], correct: &str) -> RawQuestion {
        RawQuestion {
            question: Some("Which Article guarantees equality before law?".into()),
            options: Some(options.iter().map(|s| s.to_string()).collect()),
            correct_answer: Some(correct.into()),
            explanation: Some("Article 14 of the Constitution.".into()),
            hint: Some("Fourteen.".into()),
        }
    }

    #[test]
    fn test_valid_question_passes() {
        let q = raw(&["Art. 12", "Art. 14", "Art. 19", "Art. 21"], "Art. 14")
            .validate()
            .unwrap();
        assert_eq!(q.correct_index(), Some(1));
    }

    #[test]
    fn test_rejects_wrong_option_count() {
        let err = raw(&["Art. 14", "Art. 21"], "Art. 14").validate().unwrap_err();
        assert!(err.contains("expected 4 options"));
    }

    #[test]
    fn test_rejects_answer_outside_options() {
        let err = raw(&["A", "B", "C", "D"], "E").validate().unwrap_err();
        assert!(err.contains("not among the options"));
    }

    #[test]
    fn test_rejects_blank_fields() {
        let mut q = raw(&["A", "B", "C", "D"], "A");
        q.hint = Some("   ".into());
        assert_eq!(q.validate().unwrap_err(), "missing fields");
        assert!(RawQuestion::default().validate().is_err());
    }

    #[test]
    fn test_filters_item_by_item() {
        let items = vec![
            raw(&["A", "B", "C", "D"], "A"),
            raw(&["A", "B", "C"], "A"),
            raw(&["A", "B", "C", "D"], "D"),
        ];
        assert_eq!(validate_questions(&items).unwrap().len(), 2);
    }

    #[test]
    fn test_all_invalid_is_single_error() {
        let items = vec![RawQuestion::default(), raw(&["A"], "A")];
        assert!(matches!(
            validate_questions(&items),
            Err(ContentError::NoValidQuestions { discarded: 2 })
        ));
    }

    #[test]
    fn test_domain_validation() {
        let good = RawDomain {
            name: Some("Criminal Law".into()),
            description: Some("Offences and procedure.".into()),
            icon: Some("Criminal".into()),
            subdomains: Some(vec!["Bail".into(), " ".into()]),
        };
        assert_eq!(good.validate().unwrap().subdomains, vec!["Bail"]);

        let bad = RawDomain {
            subdomains: Some(vec![]),
            ..good.clone()
        };
        assert!(validate_domains(&[bad]).is_err());
    }
}
