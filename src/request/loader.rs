//! Load batches of advisory requests from CSV

use super::{InvestmentRequest, RiskLevel};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Default path to the bundled sample request file
pub const DEFAULT_REQUESTS_PATH: &str = "data/sample_requests.csv";

/// Raw CSV row matching the request file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Salary")]
    salary: f64,
    #[serde(rename = "InvestPercent")]
    invest_percent: f64,
    #[serde(rename = "Risk")]
    risk: String,
    #[serde(rename = "HorizonYears")]
    horizon_years: u32,
}

impl CsvRow {
    fn to_request(self) -> Result<InvestmentRequest, Box<dyn Error>> {
        let risk: RiskLevel = self.risk.parse()?;
        let request =
            InvestmentRequest::new(self.salary, self.invest_percent, risk, self.horizon_years);
        request.validate()?;
        Ok(request)
    }
}

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<InvestmentRequest>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut requests = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        requests.push(row.to_request()?);
    }

    Ok(requests)
}

/// Load requests from any reader (e.g., string buffer, network stream)
pub fn load_requests_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<InvestmentRequest>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut requests = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        requests.push(row.to_request()?);
    }

    Ok(requests)
}

/// Load requests from the default sample file location
pub fn load_default_requests() -> Result<Vec<InvestmentRequest>, Box<dyn Error>> {
    load_requests(DEFAULT_REQUESTS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_requests_from_reader() {
        let csv = "\
Salary,InvestPercent,Risk,HorizonYears
50000,10,Medium,5
1000,50,Low,3
";
        let requests = load_requests_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].risk, RiskLevel::Medium);
        assert!((requests[0].investment_amount() - 5_000.0).abs() < 1e-9);
        assert_eq!(requests[1].horizon_years, 3);
    }

    #[test]
    fn test_load_rejects_bad_risk() {
        let csv = "\
Salary,InvestPercent,Risk,HorizonYears
50000,10,Reckless,5
";
        assert!(load_requests_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_domain() {
        let csv = "\
Salary,InvestPercent,Risk,HorizonYears
50000,150,Medium,5
";
        assert!(load_requests_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_default_requests() {
        let requests = load_default_requests().expect("Failed to load sample requests");
        assert!(!requests.is_empty());
        for request in &requests {
            assert!(request.validate().is_ok());
        }
    }
}
