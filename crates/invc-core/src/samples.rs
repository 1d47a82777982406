//! Bundled sample invoices.
//!
//! Five starting points covering common billing shapes. Each sample is a
//! patch; applying one goes through the same full-replace path as any other
//! preset load.

use rust_decimal::Decimal;

use crate::models::invoice::{InvoicePatch, LineItem};

/// Descriptor for a bundled sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The bundled samples, in gallery order.
pub const SAMPLES: [SamplePreset; 5] = [
    SamplePreset {
        id: "blank",
        name: "Blank Invoice",
        description: "Start fresh with an empty invoice",
    },
    SamplePreset {
        id: "freelancer",
        name: "Freelancer",
        description: "Hourly-based freelance work invoice",
    },
    SamplePreset {
        id: "agency",
        name: "Agency",
        description: "Project-based agency invoice with retainer",
    },
    SamplePreset {
        id: "saas",
        name: "SaaS / Software",
        description: "Software licensing and subscription invoice",
    },
    SamplePreset {
        id: "consulting",
        name: "Consulting",
        description: "Professional consulting engagement invoice",
    },
];

/// Build the patch for a sample id. Returns `None` for unknown ids.
pub fn sample_patch(id: &str) -> Option<InvoicePatch> {
    match id {
        "blank" => Some(InvoicePatch::default()),
        "freelancer" => Some(freelancer()),
        "agency" => Some(agency()),
        "saas" => Some(saas()),
        "consulting" => Some(consulting()),
        _ => None,
    }
}

fn s(v: &str) -> String {
    v.to_string()
}

fn item(description: &str, quantity: i64, rate: i64) -> LineItem {
    LineItem::new(description, Decimal::from(quantity), Decimal::from(rate))
}

fn freelancer() -> InvoicePatch {
    InvoicePatch {
        company_name: Some(s("John Doe Design")),
        company_address: Some(s("456 Creative Ave\nNew York, NY 10001")),
        company_email: Some(s("john@johndoedesign.com")),
        company_website: Some(s("johndoedesign.com")),
        company_phone: Some(s("+1 (555) 234-5678")),
        client_name: Some(s("Startup Labs Inc.")),
        client_address: Some(s("789 Innovation Blvd\nSan Francisco, CA 94102")),
        client_email: Some(s("billing@startuplabs.io")),
        invoice_number: Some(s("INV-2026-001")),
        tax_rate: Some(Decimal::ZERO),
        discount_rate: Some(Decimal::ZERO),
        notes: Some(s(
            "Thank you for your business! Payment via bank transfer preferred.",
        )),
        terms: Some(s("Net 30. Late payments subject to 1.5% monthly interest.")),
        items: Some(vec![
            item("UI/UX Design — Landing Page", 40, 85),
            item("Brand Identity Package", 1, 2500),
            item("Responsive Development", 24, 95),
            item("Design System Documentation", 8, 85),
        ]),
        ..Default::default()
    }
}

fn agency() -> InvoicePatch {
    InvoicePatch {
        company_name: Some(s("Nexus Creative Agency")),
        company_address: Some(s("100 Agency Row, Suite 400\nLos Angeles, CA 90015")),
        company_email: Some(s("invoices@nexuscreative.co")),
        company_website: Some(s("nexuscreative.co")),
        company_phone: Some(s("+1 (323) 555-8000")),
        client_name: Some(s("GlobalTech Corporation")),
        client_address: Some(s("1 Enterprise Plaza\nChicago, IL 60601")),
        client_email: Some(s("accounts@globaltech.com")),
        invoice_number: Some(s("NCA-2026-0042")),
        tax_rate: Some(Decimal::new(825, 2)),
        discount_rate: Some(Decimal::from(5)),
        notes: Some(s(
            "This invoice covers the Q1 retainer and additional project deliverables.",
        )),
        terms: Some(s(
            "Payment due within 15 business days. Wire transfer or ACH accepted.",
        )),
        items: Some(vec![
            item("Monthly Retainer — Creative Services", 3, 8000),
            item("Video Production — Product Launch", 1, 15000),
            item("Social Media Campaign Management", 3, 3500),
            item("Paid Media Strategy & Optimization", 1, 4500),
            item("Analytics Reporting & Insights", 3, 1200),
        ]),
        ..Default::default()
    }
}

fn saas() -> InvoicePatch {
    InvoicePatch {
        company_name: Some(s("CloudStack Software")),
        company_address: Some(s("200 Tech Park Drive\nAustin, TX 78701")),
        company_email: Some(s("billing@cloudstack.dev")),
        company_website: Some(s("cloudstack.dev")),
        company_phone: Some(s("+1 (512) 555-9090")),
        client_name: Some(s("Meridian Enterprises")),
        client_address: Some(s("55 Commerce Street\nBoston, MA 02110")),
        client_email: Some(s("procurement@meridian.com")),
        invoice_number: Some(s("CS-INV-003847")),
        tax_rate: Some(Decimal::new(65, 1)),
        discount_rate: Some(Decimal::from(10)),
        notes: Some(s("Enterprise license includes premium support and SLA.")),
        terms: Some(s("Net 45. Auto-renewal unless cancelled 30 days prior.")),
        items: Some(vec![
            item("Enterprise Platform License (Annual)", 1, 24000),
            item("Additional User Seats (50)", 50, 180),
            item("Premium Support Package", 1, 6000),
            item("Data Migration & Onboarding", 1, 3500),
            item("Custom API Integration", 20, 150),
        ]),
        ..Default::default()
    }
}

fn consulting() -> InvoicePatch {
    InvoicePatch {
        company_name: Some(s("Summit Advisory Group")),
        company_address: Some(s("350 Financial Center\nNew York, NY 10004")),
        company_email: Some(s("billing@summitadvisory.com")),
        company_website: Some(s("summitadvisory.com")),
        company_phone: Some(s("+1 (212) 555-7700")),
        client_name: Some(s("Pacific Holdings LLC")),
        client_address: Some(s("800 Harbor View\nSeattle, WA 98101")),
        client_email: Some(s("finance@pacificholdings.com")),
        invoice_number: Some(s("SAG-2026-0118")),
        tax_rate: Some(Decimal::ZERO),
        discount_rate: Some(Decimal::ZERO),
        notes: Some(s("Engagement as per SOW dated January 15, 2026.")),
        terms: Some(s("Net 30. Travel expenses billed at cost.")),
        items: Some(vec![
            item("Strategic Planning Workshop (2 days)", 2, 5000),
            item("Market Analysis & Report", 1, 8500),
            item("Executive Coaching Sessions", 6, 750),
            item("Travel & Accommodation", 1, 2200),
        ]),
        ..Default::default()
    }
}
