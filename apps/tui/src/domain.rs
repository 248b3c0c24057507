use serde::Deserialize;

use crate::chart::color::{HslColor, HueScale};
use crate::chart::month::month_name;
use crate::chart::scale::extent;
use crate::data::LoadError;

/// Payload as published: 1-based months, variance relative to the base.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<RawRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawRecord {
    pub year: i32,
    pub month: i64,
    pub variance: f64,
}

/// One normalized monthly observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub year: i32,
    /// Zero-based month, 0 = January.
    pub month: u8,
    pub variance: f64,
    /// Absolute temperature: base temperature plus variance.
    pub temp: f64,
    pub color: HslColor,
}

impl Record {
    pub fn month_name(&self) -> &'static str {
        month_name(i32::from(self.month))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub base_temperature: f64,
    /// Records in the order received, which is (year, month) order.
    pub records: Vec<Record>,
    /// `[floor(min temp), ceil(max temp)]`.
    pub temp_domain: [f64; 2],
}

impl Dataset {
    /// Shift months to zero-based, derive absolute temperatures, then color
    /// every record over the rounded temperature extent.
    pub fn normalize(raw: RawDataset, hue_range: [f64; 2]) -> Result<Self, LoadError> {
        let base = raw.base_temperature;

        let shifted = raw
            .monthly_variance
            .iter()
            .map(|r| {
                let month = u8::try_from(r.month - 1)
                    .ok()
                    .filter(|m| *m < 12)
                    .ok_or(LoadError::InvalidMonth {
                        year: r.year,
                        month: r.month,
                    })?;
                Ok((r.year, month, r.variance, base + r.variance))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        let [min, max] =
            extent(shifted.iter().map(|(_, _, _, temp)| *temp)).ok_or(LoadError::EmptyDataset)?;
        let temp_domain = [min.floor(), max.ceil()];
        let hues = HueScale::new(temp_domain, hue_range);

        let records = shifted
            .into_iter()
            .map(|(year, month, variance, temp)| Record {
                year,
                month,
                variance,
                temp,
                color: hues.color(temp),
            })
            .collect();

        Ok(Self {
            base_temperature: base,
            records,
            temp_domain,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.records.first().map(|r| r.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.records.last().map(|r| r.year)
    }

    /// `[min year, max year]` over all records.
    pub fn year_extent(&self) -> Option<[i32; 2]> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some([min, max])
    }

    pub fn month_extent(&self) -> Option<[u8; 2]> {
        let min = self.records.iter().map(|r| r.month).min()?;
        let max = self.records.iter().map(|r| r.month).max()?;
        Some([min, max])
    }

    /// Unrounded `[min temp, max temp]`.
    pub fn temp_extent(&self) -> Option<[f64; 2]> {
        extent(self.records.iter().map(|r| r.temp))
    }

    /// `"{first} - {last}: base temperature {base}℃"`, years taken from the
    /// first and last record.
    pub fn description(&self) -> String {
        let first = self.first_year().unwrap_or_default();
        let last = self.last_year().unwrap_or_default();
        format!(
            "{first} - {last}: base temperature {}℃",
            self.base_temperature
        )
    }
}
