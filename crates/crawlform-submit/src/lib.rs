//! Form location and submission-request derivation for the crawlform
//! pipeline.
//!
//! Given a parsed [`Document`] containing one or more HTML forms, this crate
//! identifies a single form, enumerates its submittable fields, resolves
//! which submit control was "clicked", merges caller overrides, and encodes
//! the result into a [`FormRequest`] ready for the transport layer.
//!
//! The whole pipeline is pure and synchronous: every invocation is a
//! side-effect-free function of the document and the caller's
//! [`SubmitOptions`], safe to run from any number of crawl workers
//! concurrently. A failure aborts that single request only; the crawl goes
//! on with other pending work.

mod clickable;
mod data;
mod encode;
mod error;
mod fields;
mod locate;
mod options;
mod request;

pub use clickable::{Clickable, resolve_clickable};
pub use data::{FormData, FormValue};
pub use error::FormError;
pub use fields::enumerate_fields;
pub use locate::locate_form;
pub use options::{ClickTarget, FormCriteria, SubmitOptions};
pub use request::FormRequest;

pub use crawlform_dom::Document;
