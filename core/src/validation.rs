use crate::markers::{IS_INVALID_CLASS, IS_VALID_CLASS, WAS_VALIDATED_CLASS};
use crate::ui::{ClassList, ConstraintForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitVerdict {
    Proceed,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValidity {
    Valid,
    Invalid,
}

/// Marks the form validated and reports whether its submission must be cancelled.
pub fn guard_submission(form: &impl ConstraintForm) -> SubmitVerdict {
    let verdict = if form.check_validity() {
        SubmitVerdict::Proceed
    } else {
        SubmitVerdict::Cancel
    };
    form.add_class(WAS_VALIDATED_CLASS);
    verdict
}

pub fn compare_passwords(password: &str, confirm: &str) -> FieldValidity {
    if password == confirm {
        FieldValidity::Valid
    } else {
        FieldValidity::Invalid
    }
}

pub fn mark_validity(field: &impl ClassList, validity: FieldValidity) {
    match validity {
        FieldValidity::Valid => {
            field.add_class(IS_VALID_CLASS);
            field.remove_class(IS_INVALID_CLASS);
        }
        FieldValidity::Invalid => {
            field.remove_class(IS_VALID_CLASS);
            field.add_class(IS_INVALID_CLASS);
        }
    }
}
