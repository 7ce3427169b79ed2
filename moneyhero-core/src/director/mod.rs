//! Scenario director module.
//!
//! Decides where the next scenario comes from: scripted early levels, the
//! debt guard, a timed generative call, or the offline fallback library.

mod agent;
mod parse;
mod prompt;

pub use agent::{
    DirectorConfig, DirectorError, ScenarioDirector, TextModel, DEBT_GUARD_THRESHOLD,
    GENERATION_TIMEOUT,
};
pub use parse::{clean_field, parse_scenario, strip_fences};
pub use prompt::{build_prompt, Concept, CONCEPTS};
