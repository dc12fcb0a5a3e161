//! Inbound and outbound adapters. The CSV modules form the batch boundary:
//! applications in, processed records out.

pub mod csv;
