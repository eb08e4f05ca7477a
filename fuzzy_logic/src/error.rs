#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FuzzyError {
    #[error("Element {0} is not defined")]
    ElementNotFound(String),

    #[error("Matrix is {rows}x{columns} but the labels describe a {row_labels}x{column_labels} relation")]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        row_labels: usize,
        column_labels: usize,
    },

    #[error("Relations are defined over different pairs of elements")]
    OrderMismatch,

    #[error("Codomain of the left relation does not match the domain of the right relation")]
    NotComposable,

    #[error("Implication type \"{0}\" does not exist")]
    UnknownImplication(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_message() {
        assert_eq!(
            FuzzyError::ElementNotFound("(2, 1)".into()).to_string(),
            "Element (2, 1) is not defined"
        );
    }
}
