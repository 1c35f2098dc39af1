#![allow(dead_code, unused_imports)]

pub(crate) mod angular_project;
pub(crate) mod test_context;

pub(crate) use angular_project::AngularProject;
pub(crate) use test_context::TestContext;
