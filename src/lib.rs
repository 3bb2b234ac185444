//! # Buddy (`buddy`)
//! Triage your container logs with your AI buddy!
//!
//! A command line program with two one-shot workflows. `triage` grabs the most recent
//! `docker compose` logs for the app service and asks a GPT for a startup diagnosis.
//! `naming` sends a fixed conversational script asking the assistant to confirm the
//! short form of its name.
//!
//! ## Usage
//! These are the library crate documentation for `buddy`. For usage of the binary see
//! ```shell
//! $ buddy --help
//! ```
//!
//! ## Environment Variables:
//! - `BUDDY_OPENAI_KEY`: Required. The OpenAI API key used for all completions.
//!   May be supplied via a `.env` file in the working directory.
//!
//! ## Notes:
//! - Each run is a single request/response exchange: fetch input, send one
//!   completion request, print the reply, exit. There are no retries and no
//!   state kept between runs.
//! - Only the trailing 2000 characters of the service logs are forwarded, to
//!   keep the prompt bounded.
//!
pub mod cli;
pub mod errors;
pub mod logs;
pub mod openai;
pub mod prompt;
pub mod workflow;
