use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Field values submitted through the review form. Validation happens with
/// `Validate::validate` before anything touches the lifecycle layer; the
/// author and the modification instant are never part of the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ReviewForm {
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub star: i32,
    #[validate(min_length = 1)]
    #[validate(max_length = 2000)]
    pub text: String,
    #[serde(default)]
    pub recommendation: bool,
}

impl ReviewForm {
    /// Overwrites the mutable fields of an existing review. Identifier and
    /// author stay untouched; the caller refreshes `modify_date`.
    pub fn apply(&self, review: &mut models::Review) {
        review.star = self.star;
        review.text = self.text.clone();
        review.recommendation = self.recommendation;
    }
}

impl From<&models::Review> for ReviewForm {
    fn from(review: &models::Review) -> Self {
        Self {
            star: review.star,
            text: review.text.clone(),
            recommendation: review.recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn valid_form() -> ReviewForm {
        ReviewForm {
            star: 4,
            text: "solid".to_string(),
            recommendation: true,
        }
    }

    #[test]
    fn form_within_bounds_passes_validation() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn star_out_of_range_is_rejected() {
        let mut form = valid_form();
        form.star = 0;
        assert!(form.validate().is_err());

        form.star = 6;
        assert!(form.validate().is_err());
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut form = valid_form();
        form.text = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn oversized_text_is_rejected() {
        let mut form = valid_form();
        form.text = "x".repeat(2001);
        assert!(form.validate().is_err());
    }

    #[test]
    fn apply_leaves_id_and_author_untouched() {
        let mut review = models::Review {
            id: 7,
            star: 5,
            text: "great".to_string(),
            recommendation: true,
            author: "alice".to_string(),
            modify_date: Utc::now(),
        };
        let form = ReviewForm {
            star: 2,
            text: "revised".to_string(),
            recommendation: false,
        };

        form.apply(&mut review);

        assert_eq!(review.id, 7);
        assert_eq!(review.author, "alice");
        assert_eq!(review.star, 2);
        assert_eq!(review.text, "revised");
        assert!(!review.recommendation);
    }

    #[test]
    fn form_prefills_from_existing_review() {
        let review = models::Review {
            id: 1,
            star: 3,
            text: "fine".to_string(),
            recommendation: false,
            author: "bob".to_string(),
            modify_date: Utc::now(),
        };

        let form = ReviewForm::from(&review);
        assert_eq!(form.star, 3);
        assert_eq!(form.text, "fine");
        assert!(!form.recommendation);
    }
}
