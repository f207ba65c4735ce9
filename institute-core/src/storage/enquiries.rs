//! Storage operations for enquiries.
//!
//! Enquiries arrive through the lead-capture and request-information forms
//! and are worked through from the dashboard: filtered, searched, sorted,
//! moved through the status workflow, deleted, exported.

use std::fmt;
use std::str::FromStr;

use rusqlite::{params, params_from_iter, Row};
use serde::{Deserialize, Serialize};

use super::{unix_now, Storage, StorageError};
use crate::validation::{
    require_max_len, require_non_empty, validate_email, validate_phone, ValidationError,
    MAX_MESSAGE_LEN, MAX_NAME_LEN,
};

/// Where an enquiry is in the follow-up workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    #[default]
    New,
    Contacted,
    Converted,
    Archived,
}

impl EnquiryStatus {
    pub const ALL: [EnquiryStatus; 4] = [
        EnquiryStatus::New,
        EnquiryStatus::Contacted,
        EnquiryStatus::Converted,
        EnquiryStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::New => "new",
            EnquiryStatus::Contacted => "contacted",
            EnquiryStatus::Converted => "converted",
            EnquiryStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        EnquiryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown enquiry status '{}'", s))
    }
}

/// A stored enquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub message: String,
    pub status: EnquiryStatus,
    /// Unix seconds
    pub created_at: u64,
}

/// Form submission, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub message: String,
}

impl NewEnquiry {
    /// Check the submission can be stored
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_max_len("name", &self.name, MAX_NAME_LEN)?;
        validate_email(self.email.trim())?;
        validate_phone(&self.phone)?;
        require_max_len("course", &self.course, MAX_NAME_LEN)?;
        require_max_len("message", &self.message, MAX_MESSAGE_LEN)?;
        Ok(())
    }
}

/// Column an enquiry listing is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnquirySort {
    #[default]
    CreatedAt,
    Name,
    Email,
    Course,
    Status,
}

impl EnquirySort {
    fn order_expr(&self) -> &'static str {
        match self {
            EnquirySort::CreatedAt => "created_at",
            EnquirySort::Name => "lower(name)",
            EnquirySort::Email => "lower(email)",
            EnquirySort::Course => "lower(course)",
            EnquirySort::Status => "status",
        }
    }
}

impl FromStr for EnquirySort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "created_at" | "created" | "date" | "timestamp" => Ok(EnquirySort::CreatedAt),
            "name" => Ok(EnquirySort::Name),
            "email" => Ok(EnquirySort::Email),
            "course" => Ok(EnquirySort::Course),
            "status" => Ok(EnquirySort::Status),
            other => Err(format!("cannot sort by '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Filter, search and sort options for listing enquiries
///
/// The default lists everything, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnquiryQuery {
    /// Only enquiries with this status (`None` = all)
    pub status: Option<EnquiryStatus>,
    /// Case-insensitive substring of name, email, course or message
    pub search: Option<String>,
    pub sort: EnquirySort,
    pub order: SortOrder,
}

impl EnquiryQuery {
    pub fn with_status(mut self, status: EnquiryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sorted_by(mut self, sort: EnquirySort, order: SortOrder) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }
}

const COLUMNS: &str = "id, name, email, phone, course, message, status, created_at";

impl Storage {
    /// Validates and stores a new enquiry with status `new`.
    pub fn submit_enquiry(&self, enquiry: &NewEnquiry) -> Result<Enquiry, StorageError> {
        self.submit_enquiry_at(enquiry, unix_now())
    }

    /// Like `submit_enquiry`, with an explicit creation time (imports).
    pub fn submit_enquiry_at(
        &self,
        enquiry: &NewEnquiry,
        created_at: u64,
    ) -> Result<Enquiry, StorageError> {
        enquiry.validate()?;

        self.conn.execute(
            "INSERT INTO enquiries (name, email, phone, course, message, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                enquiry.name.trim(),
                enquiry.email.trim(),
                enquiry.phone.trim(),
                enquiry.course.trim(),
                enquiry.message.trim(),
                EnquiryStatus::New.as_str(),
                created_at as i64,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        self.get_enquiry(id)?
            .ok_or_else(|| StorageError::NotFound(format!("enquiry {}", id)))
    }

    /// Loads an enquiry by ID.
    pub fn get_enquiry(&self, id: i64) -> Result<Option<Enquiry>, StorageError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM enquiries WHERE id = ?1", COLUMNS))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(enquiry_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Lists enquiries matching the query.
    pub fn list_enquiries(&self, query: &EnquiryQuery) -> Result<Vec<Enquiry>, StorageError> {
        let mut sql = format!("SELECT {} FROM enquiries WHERE 1 = 1", COLUMNS);
        let mut args: Vec<String> = Vec::new();

        if let Some(status) = query.status {
            args.push(status.as_str().to_string());
            sql.push_str(&format!(" AND status = ?{}", args.len()));
        }

        if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            args.push(format!("%{}%", escape_like(search)));
            let n = args.len();
            sql.push_str(&format!(
                " AND (name LIKE ?{n} ESCAPE '\\' OR email LIKE ?{n} ESCAPE '\\' \
                 OR course LIKE ?{n} ESCAPE '\\' OR message LIKE ?{n} ESCAPE '\\')"
            ));
        }

        let direction = match query.order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        sql.push_str(&format!(
            " ORDER BY {expr} {direction}, id {direction}",
            expr = query.sort.order_expr()
        ));

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(args.iter()))?;
        let mut enquiries = Vec::new();
        while let Some(row) = rows.next()? {
            enquiries.push(enquiry_from_row(row)?);
        }
        Ok(enquiries)
    }

    /// Moves an enquiry to a new status. Returns false if it does not exist.
    pub fn update_enquiry_status(
        &self,
        id: i64,
        status: EnquiryStatus,
    ) -> Result<bool, StorageError> {
        let changed = self.conn.execute(
            "UPDATE enquiries SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        Ok(changed > 0)
    }

    /// Deletes an enquiry. Returns false if it does not exist.
    pub fn delete_enquiry(&self, id: i64) -> Result<bool, StorageError> {
        let deleted = self
            .conn
            .execute("DELETE FROM enquiries WHERE id = ?1", [id])?;
        Ok(deleted > 0)
    }

    /// Exports the enquiries matching the query as CSV (RFC 4180).
    ///
    /// The header row is written even when nothing matches.
    pub fn export_enquiries_csv(&self, query: &EnquiryQuery) -> Result<String, StorageError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADER)?;
        for enquiry in self.list_enquiries(query)? {
            writer.serialize(&enquiry)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| StorageError::Corrupt(e.to_string()))
    }
}

/// Column order matches the field order of `Enquiry`
const CSV_HEADER: [&str; 8] = [
    "id",
    "name",
    "email",
    "phone",
    "course",
    "message",
    "status",
    "created_at",
];

fn enquiry_from_row(row: &Row<'_>) -> Result<Enquiry, StorageError> {
    let status: String = row.get(6)?;
    let created_at: i64 = row.get(7)?;
    Ok(Enquiry {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        course: row.get(4)?,
        message: row.get(5)?,
        status: status.parse().map_err(StorageError::Corrupt)?,
        created_at: created_at.max(0) as u64,
    })
}

fn escape_like(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
