//! Tests for the HTTP API boundary.

mod routes_tests;
