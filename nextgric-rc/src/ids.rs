//! Identifier catalogs for RIC control style 2
//!
//! Two independent catalogs are in play when a control request is built:
//! the control action ids of RIC style 2 "Radio Resource Allocation
//! Control" (E2SM-RC 7.6.3.1) selecting which action the header announces,
//! and the parameter ids of the chosen action's message body. They must
//! never be mixed within one tree, which the types here enforce: header
//! assembly consumes [`RcStyle2Action`], tree building consumes
//! [`SliceQuotaParam`].

/// RIC style type for "Radio Resource Allocation Control".
pub const RADIO_RESOURCE_ALLOCATION_CONTROL_STYLE: u32 = 2;

/// Control action ids of RIC control style 2 (E2SM-RC 7.6.3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum RcStyle2Action {
    /// DRX parameter configuration
    DrxConfiguration = 1,
    /// SR periodicity configuration
    SrPeriodicity = 2,
    /// SPS parameters configuration
    SpsParameters = 3,
    /// Configured grant control
    ConfiguredGrantControl = 4,
    /// CQI table configuration
    CqiTableConfiguration = 5,
    /// Slice-level PRB quota
    SliceLevelPrbQuota = 6,
}

impl RcStyle2Action {
    /// Catalog value of this action id.
    pub const fn id(self) -> u16 {
        self as u16
    }
}

/// Parameter ids of the "Slice-level PRB quota" action (E2SM-RC 8.4.3.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SliceQuotaParam {
    /// RRM Policy Ratio List (LIST)
    RrmPolicyRatioList = 1,
    /// RRM Policy Ratio Group (STRUCTURE, list member)
    RrmPolicyRatioGroup = 2,
    /// RRM Policy (STRUCTURE)
    RrmPolicy = 3,
    /// RRM Policy Member List (LIST)
    RrmPolicyMemberList = 4,
    /// RRM Policy Member (STRUCTURE, list member)
    RrmPolicyMember = 5,
    /// PLMN Identity (ELEMENT)
    PlmnIdentity = 6,
    /// S-NSSAI (STRUCTURE)
    SNssai = 7,
    /// SST (ELEMENT)
    Sst = 8,
    /// SD (ELEMENT)
    Sd = 9,
    /// Min PRB Policy Ratio (ELEMENT)
    MinPrbPolicyRatio = 10,
    /// Max PRB Policy Ratio (ELEMENT)
    MaxPrbPolicyRatio = 11,
    /// Dedicated PRB Policy Ratio (ELEMENT)
    DedicatedPrbPolicyRatio = 12,
}

impl SliceQuotaParam {
    /// Catalog value of this parameter id.
    pub const fn id(self) -> u32 {
        self as u32
    }
}
