/// Position of a sequence in the alignment file's header dictionary (0-based)
pub type AlignmentId = usize;

/// Position of a sequence in the transcript catalog (0-based)
pub type CatalogId = usize;

/// Marker that opens a program record in a SAM header
pub const PROGRAM_MARKER: &str = "@PG\t";

/// Tag carrying the program identifier inside a `@PG` record
pub const PROGRAM_ID_TAG: &str = "ID:";
