use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use vendor_admin::config::Settings;
use vendor_admin::models::{Notice, NoticeLevel};
use vendor_admin::services::list::ListPage;
use vendor_admin::services::{
    ApiService, DetailController, ListController, ModerationAction, Resolution, StatusFilter,
    VendorApi,
};
use vendor_admin::store::VendorStore;
use vendor_admin::utils::RequestSeq;
use vendor_admin::views::{dashboard, table, tabs};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new()?;
    let api: Arc<dyn VendorApi> = Arc::new(ApiService::new(&settings)?);
    let store = Arc::new(VendorStore::new());
    let detail_seq = RequestSeq::new();
    let list = ListController::new(api.clone(), store.clone());

    println!("vendor-admin — type 'help' for commands");
    if let Some(page) = list.load().await {
        print_page(&page);
    }

    loop {
        let Some(line) = prompt("> ")? else { break };
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.as_str(), ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "stats" => print_stats(),
            "list" => {
                if let Some(page) = list.load().await {
                    print_page(&page);
                }
            }
            "search" => {
                if let Some(page) = list.search_input(rest).await {
                    print_page(&page);
                }
            }
            "status" => {
                if let Some(page) = list.set_status(StatusFilter::parse(rest)).await {
                    print_page(&page);
                }
            }
            "page" => match rest.parse::<u32>() {
                Ok(n) if n >= 1 => {
                    if let Some(page) = list.goto_page(n).await {
                        print_page(&page);
                    }
                }
                _ => println!("usage: page <number>"),
            },
            "next" => {
                let current = list.page();
                if current.has_next_page {
                    if let Some(page) = list.goto_page(current.current_page + 1).await {
                        print_page(&page);
                    }
                } else {
                    println!("Already on the last page.");
                }
            }
            "prev" => {
                let current = list.page();
                if current.current_page > 1 {
                    if let Some(page) = list.goto_page(current.current_page - 1).await {
                        print_page(&page);
                    }
                } else {
                    println!("Already on the first page.");
                }
            }
            "open" => {
                if rest.is_empty() {
                    println!("usage: open <vendor-id>");
                } else {
                    open_vendor(api.clone(), store.clone(), detail_seq.clone(), rest, &list)
                        .await?;
                }
            }
            "quit" | "exit" => break,
            _ => println!("Unknown command, type 'help'."),
        }
    }

    Ok(())
}

/// Detail screen: resolves the vendor, renders the four tabs, then a small
/// action loop for the moderation transitions.
async fn open_vendor(
    api: Arc<dyn VendorApi>,
    store: Arc<VendorStore>,
    seq: RequestSeq,
    vendor_id: &str,
    list: &ListController,
) -> Result<()> {
    let mut detail = DetailController::new(api, store, seq, vendor_id);

    match detail.resolve().await {
        Resolution::Found => {}
        Resolution::NotFound | Resolution::Superseded => {
            println!("Vendor details not found.");
            println!("Go back to vendor list: {}", DetailController::back_link(&list.query()));
            return Ok(());
        }
    }

    print_vendor(&detail);

    loop {
        let actions = detail.available_actions();
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        if labels.is_empty() {
            println!("No actions available for this vendor.");
            break;
        }

        let Some(input) = prompt(&format!("[{} | back] > ", labels.join(" | ")))? else {
            break;
        };
        if input.eq_ignore_ascii_case("back") || input.is_empty() {
            break;
        }

        let Some(action) = actions
            .iter()
            .find(|a| a.label().eq_ignore_ascii_case(&input))
            .copied()
        else {
            println!("Unknown action.");
            continue;
        };

        let notice = run_action(&mut detail, action).await?;
        if let Some(notice) = notice {
            print_notice(&notice);
            if notice.is_success() {
                print_vendor(&detail);
            }
        }
    }

    Ok(())
}

async fn run_action(
    detail: &mut DetailController,
    action: ModerationAction,
) -> Result<Option<Notice>> {
    match action {
        ModerationAction::Accept => Ok(Some(detail.accept().await)),
        ModerationAction::Reject => {
            if let Some(text) = action.confirmation_prompt() {
                println!("{text}");
            }
            let Some(reason) = prompt("Rejection reason: ")? else {
                return Ok(None);
            };
            Ok(Some(detail.reject(&reason).await))
        }
        ModerationAction::Block | ModerationAction::Unblock => {
            if let Some(text) = action.confirmation_prompt() {
                println!("{text}");
            }
            let Some(answer) = prompt("Confirm? (y/N) ")? else {
                return Ok(None);
            };
            if !answer.eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(None);
            }
            match action {
                ModerationAction::Block => Ok(Some(detail.block().await)),
                _ => Ok(Some(detail.unblock().await)),
            }
        }
    }
}

fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_help() {
    println!("commands:");
    println!("  stats                 dashboard metrics");
    println!("  list                  reload the current page");
    println!("  search <text>         search by vendor name, shop name or phone");
    println!("  status <filter>       all | pending | approved | rejected | blocked");
    println!("  page <n> | next | prev");
    println!("  open <vendor-id>      vendor detail and moderation actions");
    println!("  quit");
}

fn print_stats() {
    for card in dashboard::stat_cards() {
        println!("{:>6}  {}", card.value, card.label);
    }
    for card in dashboard::daily_cards() {
        println!("{:>6}  {}", card.value, card.label);
    }
}

fn print_page(page: &ListPage) {
    let rows = table::rows(page);
    if rows.is_empty() {
        println!("{}", table::EMPTY_PLACEHOLDER);
    } else {
        println!(
            "{:<6} {:<24} {:<24} {:<14} {:<10} {}",
            "S.no.", "Vendor Name", "Shop Name", "Phone No", "Status", "Id"
        );
        for row in rows {
            println!(
                "{:<6} {:<24} {:<24} {:<14} {:<10} {}",
                row.serial, row.vendor_name, row.shop_name, row.phone, row.status, row.vendor_id
            );
        }
    }

    if let Some(controls) = table::pagination(page) {
        let mut parts = vec![format!("page {}", page.current_page)];
        if let Some(previous) = controls.previous_page {
            parts.push(format!("prev: {previous}"));
        }
        if let Some(next) = controls.next_page {
            parts.push(format!("next: {next}"));
        }
        println!("({})", parts.join(", "));
    }
}

fn print_vendor(detail: &DetailController) {
    let Some(vendor) = detail.vendor() else { return };

    println!(
        "\n{} — {} [{}]",
        vendor.shop_name.as_deref().unwrap_or("N/A"),
        vendor.full_name.as_deref().unwrap_or("N/A"),
        vendor.approval_status
    );
    if let Some(reason) = vendor.reject_reason.as_deref() {
        println!("Reject reason: {reason}");
    }

    for tab in tabs::Tab::ALL {
        println!("\n== {} ==", tab.title());
        for field in tabs::fields(vendor, tab) {
            println!("  {}: {}", field.label, field.value);
        }
    }
    println!();
}

fn print_notice(notice: &Notice) {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Error => "error",
        NoticeLevel::Warning => "warning",
    };
    println!("[{tag}] {}", notice.message);
}
