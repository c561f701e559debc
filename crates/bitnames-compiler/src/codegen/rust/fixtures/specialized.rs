// Code generated by bitnames; DO NOT EDIT.

const _DAYS_NAME: &str = "MondayTuesdayWednesdayThursdayFridaySaturdaySunday";
const _DAYS_OFFSET: [u8; 7] = [6, 7, 9, 8, 6, 8, 6];

static _DAYS_STRINGER: ::bitnames_table::Stringer<'static, u32> =
    ::bitnames_table::Stringer::cached(::bitnames_table::Table::contiguous(
        "Days",
        "Days(0)",
        _DAYS_NAME,
        &_DAYS_OFFSET,
        0x1,
    ));

impl ::std::fmt::Display for Days {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&_DAYS_STRINGER.mstring(::bitnames_table::FlagRepr::to_bits(self.0)))
    }
}

const _GAP_NAME: &str = "TwoThreeFiveSixSevenEightNineEleven";
const _GAP_OFFSET: [u8; 10] = [3, 5, 0, 4, 3, 5, 5, 4, 0, 6];
const _GAP_SKIPS: [u8; 2] = [1, 1];

static _GAP_STRINGER: ::bitnames_table::Stringer<'static, u32> =
    ::bitnames_table::Stringer::cached(::bitnames_table::Table::new(
        "Gap",
        "Zero",
        _GAP_NAME,
        &_GAP_OFFSET,
        &_GAP_SKIPS,
        0x4,
    ));

impl ::std::fmt::Display for Gap {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&_GAP_STRINGER.mstring(::bitnames_table::FlagRepr::to_bits(self.0)))
    }
}
