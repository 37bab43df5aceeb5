//! Application services for projects and teams.

mod registry;

pub use registry::{
    CreateGroupRequest, GroupOverview, GroupService, GroupServiceError, GroupServiceResult,
    UpdateGroupRequest,
};
