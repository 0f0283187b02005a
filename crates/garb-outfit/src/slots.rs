//! Static slot tables shared by every format codec.
//!
//! All formats agree on the 12 component slots and 9 prop slots the game
//! exposes, but each names them differently: Cherax uses descriptive JSON
//! keys, Stand uses its own menu labels in plain text, and YimMenu/Lexis
//! use the raw slot index. Keeping the index <-> key mappings in one place
//! stops the decode and encode tables for a format from drifting apart.

/// Number of clothing component slots (indices 0..=11).
pub const COMPONENT_SLOT_COUNT: usize = 12;

/// Number of accessory prop slots (indices 0..=8).
pub const PROP_SLOT_COUNT: usize = 9;

/// Cherax component object keys, indexed by slot.
pub const CHERAX_COMPONENT_NAMES: [&str; COMPONENT_SLOT_COUNT] = [
    "Head",
    "Beard",
    "Hair",
    "Torso",
    "Legs",
    "Hands",
    "Feet",
    "Teeth",
    "Special",
    "Special 2",
    "Decal",
    "Tuxedo/Jacket Bib",
];

/// Cherax prop object keys, indexed by slot.
pub const CHERAX_PROP_NAMES: [&str; PROP_SLOT_COUNT] = [
    "Head",
    "Eyes",
    "Ears",
    "Mouth",
    "Left Hand",
    "Right Hand",
    "Left Wrist",
    "Right Wrist",
    "Hip",
];

/// Stand text-file component labels, indexed by slot.
pub const STAND_COMPONENT_LABELS: [&str; COMPONENT_SLOT_COUNT] = [
    "Head",
    "Mask",
    "Hair",
    "Top",
    "Pants",
    "Gloves / Torso",
    "Shoes",
    "Accessories",
    "Top 2",
    "Top 3",
    "Decals",
    "Parachute / Bag",
];

/// The prop slots Stand has labels for. The other four prop slots cannot
/// be expressed in a Stand file and are dropped on encode.
pub const STAND_PROP_LABELS: [(u8, &str); 5] = [
    (0, "Hat"),
    (1, "Glasses"),
    (2, "Earwear"),
    (6, "Watch"),
    (7, "Bracelet"),
];

/// Face-feature keys Cherax expects in every entity file. The canonical
/// model does not carry face features, so encoders zero the whole table.
pub const CHERAX_FACE_FEATURES: [&str; 20] = [
    "Nose Width",
    "Nose Peak",
    "Nose Length",
    "Nose Bone Curveness",
    "Nose Tip",
    "Nose Bone Twist",
    "Eyebrow Height",
    "Eyebrow Indent",
    "Cheek Bones",
    "Cheek Sideways Bone Size",
    "Cheek Bones Width",
    "Eye Opening",
    "Lip Thickness",
    "Jaw Bone Width",
    "Jaw Bone Shape",
    "Chin Bone",
    "Chin Bone Length",
    "Chin Bone Shape",
    "Chin Hole",
    "Neck Thickness",
];

/// Look up the component slot index for a Cherax key.
pub fn cherax_component_slot(name: &str) -> Option<u8> {
    position(&CHERAX_COMPONENT_NAMES, name)
}

/// Look up the prop slot index for a Cherax key.
pub fn cherax_prop_slot(name: &str) -> Option<u8> {
    position(&CHERAX_PROP_NAMES, name)
}

/// Look up the component slot index for a Stand label.
pub fn stand_component_slot(label: &str) -> Option<u8> {
    position(&STAND_COMPONENT_LABELS, label)
}

/// Look up the prop slot index for a Stand label.
pub fn stand_prop_slot(label: &str) -> Option<u8> {
    STAND_PROP_LABELS
        .iter()
        .find(|(_, l)| *l == label)
        .map(|(slot, _)| *slot)
}

/// The Stand label for a prop slot, if that slot is expressible in Stand.
pub fn stand_prop_label(slot: u8) -> Option<&'static str> {
    STAND_PROP_LABELS
        .iter()
        .find(|(s, _)| *s == slot)
        .map(|(_, label)| *label)
}

fn position(table: &[&str], key: &str) -> Option<u8> {
    table.iter().position(|&name| name == key).map(|i| i as u8)
}
