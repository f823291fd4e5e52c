pub(crate) use crate::config::Config;
pub(crate) use crate::constants::*;
pub(crate) use crate::error::{check_index, Axis, LbError, LbResult};
pub(crate) use crate::flow::NodeProperties;
pub(crate) use crate::kernel;
pub(crate) use crate::velocity_set::{self, D, Q};
pub(crate) use crate::SiteType;
pub(crate) use log::{debug, info, trace, warn};
