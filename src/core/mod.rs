// Core modules implementing response decoding, verification, extraction, and error modeling.
pub mod checksum;
pub mod document;
pub mod error;
pub mod options;
pub mod package;
pub mod pointer;
pub mod verify;
pub mod whitelist;
