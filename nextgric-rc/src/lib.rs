//! E2SM-RC service model support for nextgric
//!
//! This crate implements the in-memory representation of E2SM-RC control
//! requests: the recursive RAN parameter tree (O-RAN E2SM-RC section 8),
//! the identifier catalogs for RIC control style 2, and the builder for the
//! "Slice-level PRB quota" control action (8.4.3.6). Wire encoding of the
//! tree is delegated to the session layer and is out of scope here.

pub mod control;
pub mod ids;
pub mod ran_param;
pub mod slice_quota;

pub use control::{
    build_ctrl_hdr, build_ctrl_msg, CtrlHeaderFormat, CtrlHeaderFormat1, CtrlMessageFormat,
    CtrlMessageFormat1, GnbUeId, Guami, Plmn, RcControlError, RcControlHeader, RcControlMessage,
    RcControlRequest, UeIdE2sm,
};
pub use ids::{RcStyle2Action, SliceQuotaParam, RADIO_RESOURCE_ALLOCATION_CONTROL_STYLE};
pub use ran_param::{
    RanParamError, RanParamListBuilder, RanParamStructBuilder, RanParamValue, SeqRanParam,
};
pub use slice_quota::{
    build_rrm_policy_ratio_list, build_slice_prb_quota_msg, build_slice_prb_quota_request,
    default_slice_quotas, SlicePrbQuota, PLMN_IDENTITY,
};
