//! "Slice-level PRB quota" control tree builder (E2SM-RC 8.4.3.6)
//!
//! The message body of control action 6 is a single tree:
//!
//! ```text
//! RRM Policy Ratio List, LIST (one member per slice)
//! > RRM Policy Ratio Group, STRUCTURE (len 4)
//! >> RRM Policy, STRUCTURE (len 1)
//! >>> RRM Policy Member List, LIST (len 1)
//! >>>> RRM Policy Member, STRUCTURE (len 2)
//! >>>>> PLMN Identity, ELEMENT
//! >>>>> S-NSSAI, STRUCTURE (len 2)
//! >>>>>> SST, ELEMENT
//! >>>>>> SD, ELEMENT
//! >> Min PRB Policy Ratio, ELEMENT
//! >> Max PRB Policy Ratio, ELEMENT
//! >> Dedicated PRB Policy Ratio, ELEMENT
//! ```
//!
//! The receiver parses the tree by parameter id and position, so the
//! nesting depth, child ordering and tagging here must match the schema
//! exactly.

use tracing::info;

use nextgric_common::SliceRatioConfig;

use crate::control::{
    build_ctrl_hdr, build_ctrl_msg, CtrlHeaderFormat, CtrlMessageFormat, RcControlError,
    RcControlRequest, UeIdE2sm,
};
use crate::ids::{RcStyle2Action, SliceQuotaParam, RADIO_RESOURCE_ALLOCATION_CONTROL_STYLE};
use crate::ran_param::{
    RanParamError, RanParamListBuilder, RanParamStructBuilder, RanParamValue, SeqRanParam,
};

/// PLMN identity carried in every RRM policy member.
pub const PLMN_IDENTITY: &str = "00101";

/// Per-slice input to the quota tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicePrbQuota {
    /// Slice/Service Type of the slice's S-NSSAI
    pub sst: String,
    /// Slice Differentiator of the slice's S-NSSAI
    pub sd: String,
    /// Minimum PRB policy ratio, 0 when not constrained
    pub min_prb_ratio: i64,
    /// Maximum PRB policy ratio, 0 when not constrained
    pub max_prb_ratio: i64,
    /// Dedicated PRB policy ratio (percent)
    pub dedicated_prb_ratio: i64,
}

/// The two-slice topology this xApp reconfigures: SST 1 with slice
/// differentiators 1 and 5, dedicated ratios from the validated
/// configuration, min/max left at 0 (not evaluated for this action).
pub fn default_slice_quotas(ratios: &SliceRatioConfig) -> Vec<SlicePrbQuota> {
    let ratios = ratios.validated();
    info!(ratios = %ratios, "setting slice PRB ratios");
    vec![
        SlicePrbQuota {
            sst: "1".to_string(),
            sd: "1".to_string(),
            min_prb_ratio: 0,
            max_prb_ratio: 0,
            dedicated_prb_ratio: ratios.slice1,
        },
        SlicePrbQuota {
            sst: "1".to_string(),
            sd: "5".to_string(),
            min_prb_ratio: 0,
            max_prb_ratio: 0,
            dedicated_prb_ratio: ratios.slice2,
        },
    ]
}

/// Builds one RRM Policy Ratio Group structure (unkeyed list member).
fn build_rrm_policy_ratio_group(quota: &SlicePrbQuota) -> Result<RanParamValue, RanParamError> {
    // S-NSSAI, STRUCTURE (SST, SD)
    let mut snssai = RanParamStructBuilder::with_capacity(2)?;
    snssai.push(SliceQuotaParam::Sst.id(), RanParamValue::ascii(&quota.sst))?;
    snssai.push(SliceQuotaParam::Sd.id(), RanParamValue::ascii(&quota.sd))?;
    let snssai = snssai.build()?;

    // RRM Policy Member, STRUCTURE (PLMN Identity, S-NSSAI)
    let mut member = RanParamStructBuilder::with_capacity(2)?;
    member.push(
        SliceQuotaParam::PlmnIdentity.id(),
        RanParamValue::ascii(PLMN_IDENTITY),
    )?;
    member.push(SliceQuotaParam::SNssai.id(), snssai)?;
    let member = member.build()?;

    // RRM Policy Member List, LIST (one member)
    let mut member_list = RanParamListBuilder::with_capacity(1)?;
    member_list.push(member)?;
    let member_list = member_list.build()?;

    // RRM Policy, STRUCTURE (member list)
    let mut policy = RanParamStructBuilder::with_capacity(1)?;
    policy.push(SliceQuotaParam::RrmPolicyMemberList.id(), member_list)?;
    let policy = policy.build()?;

    // RRM Policy Ratio Group, STRUCTURE (policy, min, max, dedicated)
    let mut group = RanParamStructBuilder::with_capacity(4)?;
    group.push(SliceQuotaParam::RrmPolicy.id(), policy)?;
    group.push(
        SliceQuotaParam::MinPrbPolicyRatio.id(),
        RanParamValue::integer(quota.min_prb_ratio),
    )?;
    group.push(
        SliceQuotaParam::MaxPrbPolicyRatio.id(),
        RanParamValue::integer(quota.max_prb_ratio),
    )?;
    group.push(
        SliceQuotaParam::DedicatedPrbPolicyRatio.id(),
        RanParamValue::integer(quota.dedicated_prb_ratio),
    )?;
    group.build()
}

/// Builds the RRM Policy Ratio List parameter, one group per slice.
pub fn build_rrm_policy_ratio_list(
    quotas: &[SlicePrbQuota],
) -> Result<SeqRanParam, RanParamError> {
    let mut list = RanParamListBuilder::with_capacity(quotas.len())?;
    for quota in quotas {
        list.push(build_rrm_policy_ratio_group(quota)?)?;
    }
    Ok(SeqRanParam::new(
        SliceQuotaParam::RrmPolicyRatioList.id(),
        list.build()?,
    ))
}

/// Builds the format 1 message body parameters for the quota action.
pub fn build_slice_prb_quota_msg(
    quotas: &[SlicePrbQuota],
) -> Result<Vec<SeqRanParam>, RanParamError> {
    Ok(vec![build_rrm_policy_ratio_list(quotas)?])
}

/// Assembles a complete slice-level PRB quota control request:
/// header format 1 (gNB identity, RIC style 2, action 6) plus the
/// message format 1 quota tree.
pub fn build_slice_prb_quota_request(
    quotas: &[SlicePrbQuota],
) -> Result<RcControlRequest, RcControlError> {
    let hdr = build_ctrl_hdr(
        CtrlHeaderFormat::Format1,
        UeIdE2sm::gnb_reserved(),
        RADIO_RESOURCE_ALLOCATION_CONTROL_STYLE,
        RcStyle2Action::SliceLevelPrbQuota,
    )?;
    let msg = build_ctrl_msg(
        CtrlMessageFormat::Format1,
        build_slice_prb_quota_msg(quotas)?,
    )?;
    Ok(RcControlRequest { hdr, msg })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotas(slice1: i64, slice2: i64) -> Vec<SlicePrbQuota> {
        default_slice_quotas(&SliceRatioConfig { slice1, slice2 })
    }

    fn group_fields(list: &SeqRanParam, index: usize) -> &[SeqRanParam] {
        list.value.as_list().unwrap()[index].as_structure().unwrap()
    }

    #[test]
    fn test_list_has_one_group_per_slice() {
        let list = build_rrm_policy_ratio_list(&quotas(20, 80)).unwrap();
        assert_eq!(list.id, SliceQuotaParam::RrmPolicyRatioList.id());
        assert_eq!(list.value.as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_group_shape_and_ordering() {
        let list = build_rrm_policy_ratio_list(&quotas(20, 80)).unwrap();
        for index in 0..2 {
            let fields = group_fields(&list, index);
            let ids: Vec<u32> = fields.iter().map(|f| f.id).collect();
            assert_eq!(
                ids,
                vec![
                    SliceQuotaParam::RrmPolicy.id(),
                    SliceQuotaParam::MinPrbPolicyRatio.id(),
                    SliceQuotaParam::MaxPrbPolicyRatio.id(),
                    SliceQuotaParam::DedicatedPrbPolicyRatio.id(),
                ]
            );
        }
    }

    #[test]
    fn test_member_and_snssai_shape() {
        let list = build_rrm_policy_ratio_list(&quotas(20, 80)).unwrap();
        let policy = &group_fields(&list, 0)[0].value;
        let member_list = policy
            .structure_field(SliceQuotaParam::RrmPolicyMemberList.id())
            .unwrap();
        let members = member_list.as_list().unwrap();
        assert_eq!(members.len(), 1);

        let member = members[0].as_structure().unwrap();
        assert_eq!(member.len(), 2);
        assert_eq!(member[0].id, SliceQuotaParam::PlmnIdentity.id());
        assert_eq!(member[1].id, SliceQuotaParam::SNssai.id());
        assert_eq!(
            member[0].value.as_octet_string().unwrap().as_slice(),
            b"00101"
        );

        let snssai = member[1].value.as_structure().unwrap();
        assert_eq!(snssai.len(), 2);
        assert_eq!(snssai[0].id, SliceQuotaParam::Sst.id());
        assert_eq!(snssai[1].id, SliceQuotaParam::Sd.id());
    }

    #[test]
    fn test_scenario_a_explicit_ratios() {
        // SLICE1_RATIO=20, SLICE2_RATIO=80
        let list = build_rrm_policy_ratio_list(&quotas(20, 80)).unwrap();
        for (index, expected) in [(0, 20), (1, 80)] {
            let fields = group_fields(&list, index);
            assert_eq!(fields[1].value.as_integer(), Some(0));
            assert_eq!(fields[2].value.as_integer(), Some(0));
            assert_eq!(fields[3].value.as_integer(), Some(expected));
        }
    }

    #[test]
    fn test_scenario_b_oversubscribed_ratios_repaired() {
        // SLICE1_RATIO=70, SLICE2_RATIO=90 sums over 100
        let list = build_rrm_policy_ratio_list(&quotas(70, 90)).unwrap();
        for index in 0..2 {
            let fields = group_fields(&list, index);
            assert_eq!(fields[3].value.as_integer(), Some(50));
        }
    }

    #[test]
    fn test_scenario_c_defaults() {
        let list =
            build_rrm_policy_ratio_list(&default_slice_quotas(&SliceRatioConfig::default()))
                .unwrap();
        let dedicated: Vec<i64> = (0..2)
            .map(|i| group_fields(&list, i)[3].value.as_integer().unwrap())
            .collect();
        assert_eq!(dedicated, vec![20, 80]);
    }

    #[test]
    fn test_slice_selectors_in_order() {
        let list = build_rrm_policy_ratio_list(&quotas(20, 80)).unwrap();
        let sds: Vec<Vec<u8>> = (0..2)
            .map(|i| {
                let policy = &group_fields(&list, i)[0].value;
                let member = policy
                    .structure_field(SliceQuotaParam::RrmPolicyMemberList.id())
                    .unwrap()
                    .as_list()
                    .unwrap()[0]
                    .structure_field(SliceQuotaParam::SNssai.id())
                    .unwrap()
                    .structure_field(SliceQuotaParam::Sd.id())
                    .unwrap()
                    .as_octet_string()
                    .unwrap()
                    .as_slice()
                    .to_vec();
                member
            })
            .collect();
        assert_eq!(sds, vec![b"1".to_vec(), b"5".to_vec()]);
    }

    #[test]
    fn test_generalizes_to_more_slices() {
        let mut three = quotas(10, 20);
        three.push(SlicePrbQuota {
            sst: "1".to_string(),
            sd: "9".to_string(),
            min_prb_ratio: 0,
            max_prb_ratio: 0,
            dedicated_prb_ratio: 30,
        });
        let list = build_rrm_policy_ratio_list(&three).unwrap();
        assert_eq!(list.value.as_list().unwrap().len(), 3);
        assert_eq!(group_fields(&list, 2)[3].value.as_integer(), Some(30));
    }

    #[test]
    fn test_empty_slice_set_rejected() {
        assert_eq!(
            build_rrm_policy_ratio_list(&[]).unwrap_err(),
            RanParamError::EmptyContainer
        );
    }

    #[test]
    fn test_full_request_assembly() {
        let request = build_slice_prb_quota_request(&quotas(20, 80)).unwrap();
        assert_eq!(request.hdr.ctrl_action_id(), 6);
        // Per group: group + policy + member list + member + plmn + snssai
        // + sst + sd + min + max + dedicated = 11 nodes; the root list adds 1.
        assert_eq!(request.msg.node_count(), 23);
    }

    #[test]
    fn test_identical_requests_are_deep_equal() {
        let a = build_slice_prb_quota_request(&quotas(20, 80)).unwrap();
        let b = build_slice_prb_quota_request(&quotas(20, 80)).unwrap();
        assert_eq!(a, b);
    }
}
