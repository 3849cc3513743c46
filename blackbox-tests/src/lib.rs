//! Black-box tests for the public `deformspec` API live in `tests/`.
