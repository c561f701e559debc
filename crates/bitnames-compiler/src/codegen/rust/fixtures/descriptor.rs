// Code generated by bitnames --shared; DO NOT EDIT.

static _DAYS_STRINGER: ::bitnames_table::Descriptor =
    ::bitnames_table::Descriptor::cached(::bitnames_table::Table::contiguous(
        "Days",
        "Days(0)",
        "MondayTuesdayWednesdayThursdayFridaySaturdaySunday",
        &[6, 7, 9, 8, 6, 8, 6],
        0x1,
    ));

impl ::std::fmt::Display for Days {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&_DAYS_STRINGER.mstring_widened(self.0))
    }
}

static _GAP_STRINGER: ::bitnames_table::Descriptor =
    ::bitnames_table::Descriptor::cached(::bitnames_table::Table::new(
        "Gap",
        "Zero",
        "TwoThreeFiveSixSevenEightNineEleven",
        &[3, 5, 0, 4, 3, 5, 5, 4, 0, 6],
        &[1, 1],
        0x4,
    ));

impl ::std::fmt::Display for Gap {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&_GAP_STRINGER.mstring_widened(self.0))
    }
}
