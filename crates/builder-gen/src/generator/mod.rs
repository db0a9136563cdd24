pub(crate) mod codegen;
pub(crate) mod document;
pub(crate) mod errors;
pub(crate) mod model;
pub(crate) mod options;
pub(crate) mod orchestrator;
pub(crate) mod postprocess;
pub(crate) mod remover;
pub(crate) mod shape;
