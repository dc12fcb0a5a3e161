use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record([
        "id",
        "borrower",
        "type",
        "principal",
        "rate",
        "term_months",
        "frequency",
        "purpose",
        "collateral",
        "co_signer",
    ])?;

    for i in 1..=rows {
        let id = i.to_string();
        let borrower = format!("borrower-{}", i);
        wtr.write_record([
            id.as_str(),
            borrower.as_str(),
            "PERSONAL",
            "5000",
            "4",
            "12",
            "MONTHLY",
            "",
            "",
            "",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
