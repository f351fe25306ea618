
// Re-export common utilities
pub use common::{init, mock::*, test_utils::*};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup() {
        init();
        init();
    }
}
