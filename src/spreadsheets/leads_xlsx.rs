use crate::db::leads::LeadRow;
use crate::domain::format;
use crate::domain::leads::LeadKind;
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 7] = ["Date", "Type", "Car", "Name", "Phone", "Trade-in car", "Comment"];

/// Builds the leads workbook in memory.
pub fn leads_workbook(leads: &[LeadRow]) -> Result<Vec<u8>, ServerError> {
    let xlsx = |what: &str, e: rust_xlsxwriter::XlsxError| {
        ServerError::XlsxError(format!("Failed to write {what}: {e}"))
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| xlsx(header, e))?;
    }

    for (i, lead) in leads.iter().enumerate() {
        let r = (i + 1) as u32;
        let kind = LeadKind::parse(&lead.kind)
            .map(LeadKind::title)
            .unwrap_or(lead.kind.as_str());

        let cells = [
            format::date_time(lead.created_at),
            kind.to_string(),
            lead.car_name.clone().unwrap_or_else(|| "(deleted)".to_string()),
            lead.name.clone(),
            lead.phone.clone(),
            lead.trade_in_car.clone().unwrap_or_default(),
            lead.comment.clone().unwrap_or_default(),
        ];

        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value)
                .map_err(|e| xlsx(HEADERS[col], e))?;
        }
    }

    worksheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_leads_xlsx(leads: &[LeadRow], now: i64) -> ResultResp {
    let buffer = leads_workbook(leads)?;
    let date = format::date_time(now);
    let day = date.split(' ').next().unwrap_or("export");
    xlsx_response(buffer, &format!("leads_{day}.xlsx"))
}
