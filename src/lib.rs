//! # bookhal - a synchronous HAL+JSON API client core
//!
//! `bookhal` is the transport layer for a booking/scheduling REST API that
//! speaks HAL+JSON. One executor performs every network call: it encodes
//! request parameters, attaches the fixed API credential headers, classifies
//! the response, and hands back an [`Envelope`] wrapping a decoded
//! [`Representation`] that domain models traverse via link relations.
//!
//! The call model is deliberately simple: blocking, one connection per call,
//! no retries, no caching, no pagination. Failures always surface as typed
//! errors carrying the raw response text and status code.
//!
//! ## Quick start
//!
//! ```no_run
//! use bookhal::{ApiConfig, Client, RequestOptions};
//!
//! fn main() -> Result<(), bookhal::Error> {
//!     let client = Client::builder()
//!         .config(ApiConfig::new("my-app/1.0", "app-id", "app-key"))
//!         .build()?;
//!
//!     // Fetch a company resource.
//!     let company = client.get(
//!         "https://api.example.com/companies/37028",
//!         RequestOptions::new().with_auth_token("TOKEN"),
//!     )?;
//!     println!("name: {:?}", company.property("name"));
//!
//!     // Follow a link relation discovered on the resource, carrying the
//!     // same auth token forward.
//!     if let Some(link) = company.link("services") {
//!         let services = client.get(
//!             &link.href,
//!             RequestOptions::new().with_auth_token(company.auth_token().unwrap()),
//!         )?;
//!         println!("{} embedded services", services.embedded("services").map_or(0, <[_]>::len));
//!     }
//!
//!     // Create a resource with a form-encoded body.
//!     let created = client.post(
//!         "https://api.example.com/companies",
//!         RequestOptions::new()
//!             .with_auth_token("TOKEN")
//!             .with_param("name", "Acme"),
//!     )?;
//!     println!("created id: {:?}", created.property("id"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every failure is a typed [`Error`]; server-reported errors preserve the
//! status code and raw body:
//!
//! ```no_run
//! use bookhal::{ApiConfig, Client, Error, RequestOptions};
//!
//! # fn example() -> Result<(), Error> {
//! # let client = Client::builder()
//! #     .config(ApiConfig::new("my-app/1.0", "app-id", "app-key"))
//! #     .build()?;
//! match client.get("https://api.example.com/companies/0", RequestOptions::new()) {
//!     Ok(envelope) => println!("{:?}", envelope.properties()),
//!     Err(Error::Http { status, raw_response, .. }) => {
//!         eprintln!("server said {:?}: {}", status, raw_response);
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod encoding;
mod error;
pub mod hal;
mod request;
mod response;
pub mod transport;

pub use client::{ApiConfig, Client, ClientBuilder};
pub use encoding::{encode, ContentType, Params};
pub use error::{Error, Result};
pub use hal::{Link, Representation};
pub use request::RequestOptions;
pub use response::Envelope;
pub use transport::{PreparedRequest, RawResponse, Transport};
