pub mod clinician;
pub mod individual;
pub mod parent;
