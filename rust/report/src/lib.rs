// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Slabguard Report
//!
//! CSV serialization of audit findings. One row per unprotected segment,
//! coordinates in metres with three decimals; zero-length rows are the
//! safe/unsafe transition markers.

use slabguard_analysis::ClassifiedSegment;
use std::io::{self, Write};

/// Column header of the findings CSV
pub const CSV_HEADER: &str = "x_start,y_start,z_start,x_end,y_end,z_end,Typ";

/// Write the findings CSV to any sink
pub fn write_csv<W: Write>(writer: &mut W, segments: &[ClassifiedSegment]) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for s in segments {
        writeln!(
            writer,
            "{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{}",
            s.start.x, s.start.y, s.start.z, s.end.x, s.end.y, s.end.z, s.category
        )?;
    }
    Ok(())
}

/// Write the findings CSV to a file path
pub fn write_csv_file(
    path: impl AsRef<std::path::Path>,
    segments: &[ClassifiedSegment],
) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_csv(&mut file, segments)?;
    file.flush()
}
