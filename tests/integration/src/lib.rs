//! Integration tests for the didcert workspace live in `tests/`.
