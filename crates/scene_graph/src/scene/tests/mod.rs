//! Integration tests for the scene graph container

mod traversal_integration;
