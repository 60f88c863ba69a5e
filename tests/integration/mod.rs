//! Integration tests for the cabinet query engine and CLI

mod cli_contracts;
mod nested_cabinet;
