use enumflags2::{bitflags, BitFlags};

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Region {
    Battery = 0b0000_0001,
    HourTens = 0b0000_0010,
    HourOnes = 0b0000_0100,
    MinuteTens = 0b0000_1000,
    MinuteOnes = 0b0001_0000,
    Date = 0b0010_0000,
}

pub const BULLET_REGIONS: [Region; 4] = [
    Region::HourTens,
    Region::HourOnes,
    Region::MinuteTens,
    Region::MinuteOnes,
];

impl Region {
    pub fn bullet_index(self) -> Option<usize> {
        BULLET_REGIONS.iter().position(|x| *x == self)
    }

    pub fn time_regions() -> BitFlags<Region> {
        Region::HourTens | Region::HourOnes | Region::MinuteTens | Region::MinuteOnes | Region::Date
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DirtyRegions {
    regions: BitFlags<Region>,
}

impl DirtyRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, region: Region) {
        self.regions.insert(region);
    }

    pub fn mark_all(&mut self, regions: BitFlags<Region>) {
        self.regions.insert(regions);
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> BitFlags<Region> {
        self.regions
    }

    pub fn take(&mut self) -> BitFlags<Region> {
        std::mem::take(&mut self.regions)
    }
}
