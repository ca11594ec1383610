use crate::config::SalaryConfig;
use crate::error::{FetchError, Result};
use crate::models::SalaryRecord;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use tracing::{info, warn};

/// Most seasons listed per player on the ranking page
const MAX_SALARY_YEARS: usize = 6;

/// HoopsHype salary ranking scraper
pub struct SalaryScraper {
    client: Client,
    url: String,
}

impl SalaryScraper {
    /// Create a new salary scraper
    pub fn new(config: &SalaryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self { client, url: config.url.clone() })
    }

    /// Scrape salaries keyed by lower-cased player name
    pub async fn fetch_salaries(&self) -> Result<HashMap<String, SalaryRecord>> {
        info!("Fetching salaries from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        let html = response.text().await?;
        info!("Successfully fetched HTML ({} bytes)", html.len());

        let salaries = parse_salary_table(&html)?;
        info!("Fetched salaries for {} players", salaries.len());
        Ok(salaries)
    }
}

/// Parse the salary ranking table out of the page HTML.
///
/// Expects a header row followed by rows of `name-link | year 1 | ... | year 6`.
/// Yearly cells are read until the first blank, `-` or non-numeric one.
/// A page without the table yields an empty map.
pub fn parse_salary_table(html: &str) -> Result<HashMap<String, SalaryRecord>> {
    let document = Html::parse_document(html);

    let table_selector = selector("table.hh-salaries-ranking-table")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;
    let link_selector = selector("a")?;

    let mut salaries = HashMap::new();

    let Some(table) = document.select(&table_selector).next() else {
        warn!("Salary table not found on page");
        return Ok(salaries);
    };

    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() < 2 {
            continue;
        }

        let Some(link) = cells[0].select(&link_selector).next() else {
            continue;
        };
        let name = link.text().collect::<String>().trim().to_string();

        let yearly: Vec<u64> = cells[1..]
            .iter()
            .take(MAX_SALARY_YEARS)
            .map(|cell| parse_salary_cell(&cell.text().collect::<String>()))
            .take_while(Option::is_some)
            .flatten()
            .collect();

        if let Some(&salary) = yearly.first() {
            salaries.insert(
                name.to_lowercase(),
                SalaryRecord { salary, years_remaining: yearly.len() as u32 },
            );
        }
    }

    Ok(salaries)
}

/// "$51,415,938" -> 51415938; blank, "-" and anything non-numeric -> None
fn parse_salary_cell(text: &str) -> Option<u64> {
    let cleaned = text.trim().replace(['$', ','], "");
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    cleaned.parse().ok()
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| FetchError::Selector(format!("{css}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table class="hh-salaries-ranking-table">
          <thead><tr><th>Player</th><th>2024/25</th><th>2025/26</th></tr></thead>
          <tbody>
            <tr>
              <td class="name"><a href="/player/stephen-curry">Stephen Curry</a></td>
              <td>$55,761,216</td><td>$59,606,817</td><td>-</td><td>$1</td>
            </tr>
            <tr>
              <td><a href="/player/joel-embiid"> Joel Embiid </a></td>
              <td>$51,415,938</td><td>$55,224,526</td><td>$59,033,114</td>
              <td>$62,841,702</td><td>$66,650,290</td><td>$70,000,000</td><td>$99,999,999</td>
            </tr>
            <tr>
              <td><a href="/player/no-salary">No Salary</a></td><td>-</td><td>$5,000,000</td>
            </tr>
            <tr>
              <td>Unlinked Player</td><td>$10,000,000</td>
            </tr>
            <tr>
              <td><a href="/player/odd">Odd Cell</a></td><td>$3,000,000</td>
              <td>TBD</td><td>$4,000,000</td>
            </tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_salary_table() {
        let salaries = parse_salary_table(PAGE).unwrap();

        assert_eq!(salaries.len(), 3);
        assert_eq!(
            salaries["stephen curry"],
            SalaryRecord { salary: 55_761_216, years_remaining: 2 }
        );
        assert_eq!(salaries["odd cell"], SalaryRecord { salary: 3_000_000, years_remaining: 1 });
    }

    #[test]
    fn test_salary_years_capped_at_six() {
        let salaries = parse_salary_table(PAGE).unwrap();
        assert_eq!(
            salaries["joel embiid"],
            SalaryRecord { salary: 51_415_938, years_remaining: 6 }
        );
    }

    #[test]
    fn test_rows_without_amount_or_link_dropped() {
        let salaries = parse_salary_table(PAGE).unwrap();
        assert!(!salaries.contains_key("no salary"));
        assert!(!salaries.contains_key("unlinked player"));
    }

    #[test]
    fn test_missing_table_gives_empty_map() {
        let salaries = parse_salary_table("<html><body><p>Blocked</p></body></html>").unwrap();
        assert!(salaries.is_empty());
    }

    #[test]
    fn test_parse_salary_cell() {
        assert_eq!(parse_salary_cell(" $1,234,567 "), Some(1_234_567));
        assert_eq!(parse_salary_cell("-"), None);
        assert_eq!(parse_salary_cell(""), None);
        assert_eq!(parse_salary_cell("$1.5M"), None);
    }
}
