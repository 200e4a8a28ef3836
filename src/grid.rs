//! Room Grid
//!
//! Turns the flat bed list from the backend into display rows.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::BedRecord;

const NOT_AVAILABLE: &str = "N/A";

/// How the grid lays out beds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLayout {
    /// One card per room, emergency rooms hidden
    #[default]
    Grouped,
    /// One card per bed, nothing hidden
    PerBed,
}

/// Occupancy as shown on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BedState {
    /// Bed in an emergency room, never allocated
    EmergencyOnly,
    /// Occupant name, or "Allocated" when the backend has none
    Occupied(String),
    Vacant,
}

impl BedState {
    fn of(bed: &BedRecord) -> Self {
        if bed.is_emergency() {
            BedState::EmergencyOnly
        } else {
            Self::occupancy(bed.is_occupied, bed.occupant.as_deref())
        }
    }

    fn occupancy(occupied: bool, occupant: Option<&str>) -> Self {
        if occupied {
            let name = occupant.filter(|n| !n.is_empty()).unwrap_or("Allocated");
            BedState::Occupied(name.to_string())
        } else {
            BedState::Vacant
        }
    }

    pub fn label(&self) -> &str {
        match self {
            BedState::EmergencyOnly => "Emergency Only",
            BedState::Occupied(name) => name,
            BedState::Vacant => "Vacant",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BedState::EmergencyOnly => "bed emergency",
            BedState::Occupied(_) => "bed occupied",
            BedState::Vacant => "bed vacant",
        }
    }
}

/// Bed inside a grouped room card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomBed {
    pub label: Option<String>,
    pub state: BedState,
}

impl RoomBed {
    fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// e.g. "Bed B: Vacant"
    pub fn summary(&self) -> String {
        format!("Bed {}: {}", self.display_label(), self.state.label())
    }
}

/// Beds grouped under one (block, room number)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub block: String,
    pub room_number: String,
    pub floor: Option<i64>,
    pub room_type: Option<String>,
    /// Sorted by label
    pub beds: Vec<RoomBed>,
}

impl Room {
    pub fn title(&self) -> String {
        format!("{} - {}", self.block, self.room_number)
    }

    /// e.g. "Floor 2 - Double"
    pub fn subtitle(&self) -> String {
        let floor = self.floor.map(|f| f.to_string()).unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let room_type = self.room_type.as_deref().unwrap_or(NOT_AVAILABLE);
        format!("Floor {} - {}", floor, room_type)
    }

    fn is_emergency(&self) -> bool {
        self.room_type.as_deref() == Some(crate::models::EMERGENCY_ROOM_TYPE)
    }
}

/// One card in the per-bed layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedCard {
    pub block: String,
    pub room_number: String,
    pub label: Option<String>,
    pub state: BedState,
}

impl BedCard {
    pub fn title(&self) -> String {
        format!(
            "{}-{} / Bed {}",
            self.block,
            self.room_number,
            self.label.as_deref().unwrap_or(NOT_AVAILABLE)
        )
    }
}

/// Group beds into rooms, ordered by block, floor (missing first), room number.
/// Emergency rooms are left out.
pub fn group_rooms(beds: &[BedRecord]) -> Vec<Room> {
    let mut rooms: HashMap<(&str, &str), Room> = HashMap::new();
    for bed in beds {
        let room = rooms
            .entry((bed.block_name.as_str(), bed.room_number.as_str()))
            .or_insert_with(|| Room {
                block: bed.block_name.clone(),
                room_number: bed.room_number.clone(),
                floor: bed.floor,
                room_type: bed.room_type.clone(),
                beds: Vec::new(),
            });
        room.beds.push(RoomBed {
            label: bed.bed_label.clone(),
            state: BedState::occupancy(bed.is_occupied, bed.occupant.as_deref()),
        });
    }

    let mut rooms: Vec<Room> = rooms.into_values().filter(|r| !r.is_emergency()).collect();
    rooms.sort_by(compare_rooms);
    for room in &mut rooms {
        // Unlabelled beds sort as "N/A"
        room.beds.sort_by(|a, b| a.display_label().cmp(b.display_label()));
    }
    rooms
}

/// One card per bed, in input order
pub fn bed_cards(beds: &[BedRecord]) -> Vec<BedCard> {
    beds.iter()
        .map(|bed| BedCard {
            block: bed.block_name.clone(),
            room_number: bed.room_number.clone(),
            label: bed.bed_label.clone(),
            state: BedState::of(bed),
        })
        .collect()
}

/// (occupied, vacant) counts over allocable beds; emergency rooms excluded
pub fn occupancy(beds: &[BedRecord]) -> (usize, usize) {
    beds.iter()
        .filter(|b| !b.is_emergency())
        .fold((0, 0), |(occupied, vacant), b| {
            if b.is_occupied {
                (occupied + 1, vacant)
            } else {
                (occupied, vacant + 1)
            }
        })
}

fn compare_rooms(a: &Room, b: &Room) -> Ordering {
    // None < Some, so rooms without a floor sort first
    a.block
        .cmp(&b.block)
        .then_with(|| a.floor.cmp(&b.floor))
        .then_with(|| a.room_number.cmp(&b.room_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bed(block: &str, room: &str, floor: Option<i64>, label: &str) -> BedRecord {
        BedRecord {
            block_name: block.to_string(),
            room_number: room.to_string(),
            floor,
            room_type: Some("Double".to_string()),
            bed_label: Some(label.to_string()),
            is_occupied: false,
            occupant: None,
        }
    }

    fn emergency(mut bed: BedRecord) -> BedRecord {
        bed.room_type = Some("Emergency".to_string());
        bed
    }

    #[test]
    fn test_group_order_block_floor_room() {
        let beds = vec![
            bed("B", "102", Some(2), "A"),
            bed("A", "101", Some(1), "B"),
            bed("A", "201", None, "A"),
            bed("A", "101", Some(1), "A"),
        ];

        let rooms = group_rooms(&beds);
        let titles: Vec<_> = rooms.iter().map(Room::title).collect();
        assert_eq!(titles, vec!["A - 201", "A - 101", "B - 102"]);

        let labels: Vec<_> = rooms[1].beds.iter().map(|b| b.label.clone().unwrap()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(rooms[0].subtitle(), "Floor N/A - Double");
    }

    #[test]
    fn test_one_group_per_room_and_emergency_excluded() {
        let beds = vec![
            bed("A", "101", Some(1), "A"),
            bed("A", "101", Some(1), "B"),
            bed("B", "101", Some(1), "A"),
            emergency(bed("A", "001", Some(0), "A")),
            emergency(bed("A", "001", Some(0), "B")),
        ];

        let rooms = group_rooms(&beds);
        assert_eq!(rooms.len(), 2);

        let rendered: usize = rooms.iter().map(|r| r.beds.len()).sum();
        let emergency_beds = beds.iter().filter(|b| b.is_emergency()).count();
        assert_eq!(rendered, beds.len() - emergency_beds);
        assert_eq!(occupancy(&beds), (0, 3));
    }

    #[test]
    fn test_bed_summaries() {
        let mut taken = bed("A", "101", Some(1), "A");
        taken.is_occupied = true;
        taken.occupant = Some("Asha Rao".to_string());
        let mut anonymous = bed("A", "101", Some(1), "B");
        anonymous.is_occupied = true;
        let free = bed("A", "101", Some(1), "C");

        let rooms = group_rooms(&[free, anonymous, taken]);
        let summaries: Vec<_> = rooms[0].beds.iter().map(RoomBed::summary).collect();
        assert_eq!(summaries, vec!["Bed A: Asha Rao", "Bed B: Allocated", "Bed C: Vacant"]);
    }

    #[test]
    fn test_unlabelled_bed_sorts_as_na() {
        let mut unlabelled = bed("A", "101", Some(1), "");
        unlabelled.bed_label = None;
        let beds = vec![bed("A", "101", Some(1), "Z"), unlabelled, bed("A", "101", Some(1), "A")];

        let rooms = group_rooms(&beds);
        let summaries: Vec<_> = rooms[0].beds.iter().map(RoomBed::summary).collect();
        assert_eq!(summaries, vec!["Bed A: Vacant", "Bed N/A: Vacant", "Bed Z: Vacant"]);
    }

    #[test]
    fn test_bed_cards_keep_everything_in_order() {
        let mut occupied = bed("B", "102", Some(2), "A");
        occupied.is_occupied = true;
        let beds = vec![
            occupied,
            emergency(bed("A", "001", Some(0), "A")),
            bed("A", "101", Some(1), "B"),
        ];

        let cards = bed_cards(&beds);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].state, BedState::Occupied("Allocated".to_string()));
        assert_eq!(cards[1].state, BedState::EmergencyOnly);
        assert_eq!(cards[1].state.label(), "Emergency Only");
        assert_eq!(cards[2].state, BedState::Vacant);
        assert_eq!(cards[2].title(), "A-101 / Bed B");
    }
}
