//! Core data types for VCF header metadata.
//!
//! - [`category::Category`]: the kind of a `##` line and its fixed column set
//! - [`record::FieldValue`]: a declared value, or the explicit `Absent` marker
//! - [`record::AttributeRecord`], [`record::KeypairRecord`]: one parsed line
//! - [`table::HeaderTables`]: one table per category, in sheet order
//!
//! ## Columns
//!
//! | Sheet         | Columns |
//! |---------------|---------|
//! | File Metadata | Name, Value |
//! | INFO          | ID, Number, Type, Description, Source, Version |
//! | FILTER        | ID, Description |
//! | FORMAT        | ID, Number, Type, Description |
//! | ALT           | ID, Description |
//! | contig        | ID, URL |
//! | SAMPLE        | ID, Genomes, Mixture, Description |
//! | PEDIGREE      | Name, Genome |

pub mod category;
pub mod record;
pub mod table;
