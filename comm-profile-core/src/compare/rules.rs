use crate::model::{contains_name, AttributeItem, Dimension};
use crate::vocab;

/// New-side items that make a whole dimension count as covered.
pub(crate) fn covers_everything(kind: Dimension, new: &[AttributeItem]) -> bool {
    let marker = match kind {
        Dimension::RequestType => vocab::REQUEST_ASYNC,
        Dimension::PayloadType => vocab::PAYLOAD_MIME,
        Dimension::QosType => vocab::QOS_COMPLEX,
        Dimension::HeaderSize => vocab::HEADER_LARGE,
        _ => return false,
    };
    contains_name(new, marker)
}

/// Old-side items that are representable by any new side, without a
/// counterpart item.
pub(crate) fn always_representable(
    kind: Dimension,
    old_item: &AttributeItem,
    new: &[AttributeItem],
) -> bool {
    match kind {
        Dimension::AuthenticationType if old_item.name == vocab::AUTH_SIMPLE => !new.is_empty(),
        Dimension::PayloadType => old_item.name == vocab::PAYLOAD_TEXT,
        Dimension::HeaderSize => old_item.name == vocab::HEADER_SMALL,
        _ => false,
    }
}

/// Item-to-item match, with DTLS and TLS interchangeable for security.
pub(crate) fn items_match(
    kind: Dimension,
    old_item: &AttributeItem,
    new_item: &AttributeItem,
) -> bool {
    if old_item == new_item {
        return true;
    }
    if kind != Dimension::SecurityType {
        return false;
    }
    let (old_name, new_name) = (old_item.name.as_str(), new_item.name.as_str());
    (old_name == vocab::SECURITY_DTLS && new_name == vocab::SECURITY_TLS)
        || (old_name == vocab::SECURITY_TLS && new_name == vocab::SECURITY_DTLS)
}
