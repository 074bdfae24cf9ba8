//! E2SM-RC control request assembly
//!
//! A control request pairs a header (which UE or node the action targets,
//! which style and action id it announces) with a message body carrying the
//! action's RAN parameter tree. Only header format 1 and message format 1
//! are implemented; the other formats defined by the service model are
//! explicit variants of the format selectors so callers get a typed
//! `NotImplemented` error instead of an assertion.

use thiserror::Error;

use crate::ids::RcStyle2Action;
use crate::ran_param::{RanParamError, SeqRanParam};

/// Errors raised while assembling a control request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RcControlError {
    /// A format defined by the service model but not implemented here.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// A control message must carry at least one top-level parameter.
    #[error("control message body carries no RAN parameters")]
    EmptyMessage,

    /// Parameter tree construction failed.
    #[error(transparent)]
    RanParam(#[from] RanParamError),
}

/// Public Land Mobile Network identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plmn {
    /// Mobile Country Code (3 digits)
    pub mcc: u16,
    /// Mobile Network Code (2-3 digits)
    pub mnc: u16,
    /// Number of MNC digits (2 or 3)
    pub mnc_digit_len: u8,
}

/// Globally Unique AMF Identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guami {
    /// PLMN of the AMF
    pub plmn: Plmn,
    /// AMF Region ID
    pub amf_region_id: u8,
    /// AMF Set ID (10 bits)
    pub amf_set_id: u16,
    /// AMF Pointer (6 bits)
    pub amf_pointer: u8,
}

/// gNB UE identity as carried in an E2SM header.
///
/// The AMF-related fields are reserved at 0 for the slice-quota action;
/// the receiver does not evaluate them for node-scoped control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GnbUeId {
    /// AMF UE NGAP ID, reserved at 0
    pub amf_ue_ngap_id: u64,
    /// GUAMI of the serving AMF
    pub guami: Guami,
}

/// UE identity variants of the E2SM common header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UeIdE2sm {
    /// gNB UE identity
    Gnb(GnbUeId),
}

impl UeIdE2sm {
    /// The fixed gNB identity used for node-scoped slice control: PLMN
    /// 001/01 (2-digit MNC) with all AMF fields reserved at 0.
    pub fn gnb_reserved() -> Self {
        Self::Gnb(GnbUeId {
            amf_ue_ngap_id: 0,
            guami: Guami {
                plmn: Plmn {
                    mcc: 1,
                    mnc: 1,
                    mnc_digit_len: 2,
                },
                amf_region_id: 0,
                amf_set_id: 0,
                amf_pointer: 0,
            },
        })
    }
}

/// Header format selector (E2SM-RC 9.2.1.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtrlHeaderFormat {
    /// Format 1: UE-level control header
    Format1,
    /// Format 2: UE-level control header with RIC style list
    Format2,
}

/// Message format selector (E2SM-RC 9.2.1.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtrlMessageFormat {
    /// Format 1: flat RAN parameter list
    Format1,
    /// Format 2: per-style parameter list
    Format2,
}

/// Control header format 1 contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlHeaderFormat1 {
    /// Target UE (or node-scoped placeholder) identity
    pub ue_id: UeIdE2sm,
    /// RIC style type the action id belongs to
    pub ric_style_type: u32,
    /// Control action id within the style's catalog
    pub ctrl_action_id: u16,
}

/// An assembled control header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RcControlHeader {
    /// Format 1 header
    Format1(CtrlHeaderFormat1),
}

impl RcControlHeader {
    /// Control action id announced by this header.
    pub fn ctrl_action_id(&self) -> u16 {
        match self {
            Self::Format1(hdr) => hdr.ctrl_action_id,
        }
    }
}

/// Control message format 1 contents: the top-level RAN parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtrlMessageFormat1 {
    /// Top-level parameters of the message body
    pub ran_params: Vec<SeqRanParam>,
}

/// An assembled control message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RcControlMessage {
    /// Format 1 message
    Format1(CtrlMessageFormat1),
}

impl RcControlMessage {
    /// Total node count across all top-level parameters.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Format1(msg) => msg.ran_params.iter().map(SeqRanParam::node_count).sum(),
        }
    }
}

/// A complete control request, immutable once assembled.
///
/// The request exclusively owns its parameter tree; dropping the request
/// releases the whole tree regardless of whether dispatch succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RcControlRequest {
    /// Control header
    pub hdr: RcControlHeader,
    /// Control message body
    pub msg: RcControlMessage,
}

/// Builds a control header in the requested format.
///
/// Only format 1 is implemented for the slice-quota action.
pub fn build_ctrl_hdr(
    format: CtrlHeaderFormat,
    ue_id: UeIdE2sm,
    ric_style_type: u32,
    action: RcStyle2Action,
) -> Result<RcControlHeader, RcControlError> {
    match format {
        CtrlHeaderFormat::Format1 => Ok(RcControlHeader::Format1(CtrlHeaderFormat1 {
            ue_id,
            ric_style_type,
            ctrl_action_id: action.id(),
        })),
        CtrlHeaderFormat::Format2 => Err(RcControlError::NotImplemented(
            "control header format 2",
        )),
    }
}

/// Builds a control message in the requested format.
///
/// The body must carry at least one top-level parameter; an empty body is
/// a programming error on the builder side, not a valid request.
pub fn build_ctrl_msg(
    format: CtrlMessageFormat,
    ran_params: Vec<SeqRanParam>,
) -> Result<RcControlMessage, RcControlError> {
    match format {
        CtrlMessageFormat::Format1 => {
            if ran_params.is_empty() {
                return Err(RcControlError::EmptyMessage);
            }
            Ok(RcControlMessage::Format1(CtrlMessageFormat1 { ran_params }))
        }
        CtrlMessageFormat::Format2 => Err(RcControlError::NotImplemented(
            "control message format 2",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::RADIO_RESOURCE_ALLOCATION_CONTROL_STYLE;
    use crate::ran_param::RanParamValue;

    #[test]
    fn test_header_format_1() {
        let hdr = build_ctrl_hdr(
            CtrlHeaderFormat::Format1,
            UeIdE2sm::gnb_reserved(),
            RADIO_RESOURCE_ALLOCATION_CONTROL_STYLE,
            RcStyle2Action::SliceLevelPrbQuota,
        )
        .unwrap();
        assert_eq!(hdr.ctrl_action_id(), 6);
        let RcControlHeader::Format1(inner) = hdr;
        assert_eq!(inner.ric_style_type, 2);
        let UeIdE2sm::Gnb(ue) = inner.ue_id;
        assert_eq!(ue.amf_ue_ngap_id, 0);
        assert_eq!(ue.guami.plmn.mcc, 1);
        assert_eq!(ue.guami.plmn.mnc_digit_len, 2);
    }

    #[test]
    fn test_header_format_2_not_implemented() {
        let err = build_ctrl_hdr(
            CtrlHeaderFormat::Format2,
            UeIdE2sm::gnb_reserved(),
            RADIO_RESOURCE_ALLOCATION_CONTROL_STYLE,
            RcStyle2Action::SliceLevelPrbQuota,
        )
        .unwrap_err();
        assert_eq!(
            err,
            RcControlError::NotImplemented("control header format 2")
        );
    }

    #[test]
    fn test_message_rejects_empty_body() {
        let err = build_ctrl_msg(CtrlMessageFormat::Format1, Vec::new()).unwrap_err();
        assert_eq!(err, RcControlError::EmptyMessage);
    }

    #[test]
    fn test_message_format_2_not_implemented() {
        let params = vec![SeqRanParam::new(1, RanParamValue::integer(0))];
        let err = build_ctrl_msg(CtrlMessageFormat::Format2, params).unwrap_err();
        assert_eq!(
            err,
            RcControlError::NotImplemented("control message format 2")
        );
    }
}
