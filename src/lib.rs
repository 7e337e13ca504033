//! Workspace-level integration tests for fibdrv-rs live under `tests/`.
