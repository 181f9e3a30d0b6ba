use clap::Parser;
use roster::error::Result;
use roster::model::{SortField, SortOrder};
use roster::session::DirectorySession;
use roster::store::{default_seed, EmployeeStore};
use roster::validate::{validate_form, EmployeeForm};
use std::path::Path;

mod args;
mod print;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut session = init_session(cli.seed.as_deref())?;

    match cli.command {
        Some(Commands::List {
            search,
            department,
            role,
            sort,
            desc,
            page,
            per_page,
            json,
        }) => handle_list(
            &mut session,
            ListQuery {
                search,
                department,
                role,
                sort,
                desc,
                page,
                per_page,
                json,
            },
        ),
        Some(Commands::Show { id, json }) => handle_show(&session, id, json),
        Some(Commands::Departments) => {
            print::print_values(&session.get_departments());
            Ok(())
        }
        Some(Commands::Roles) => {
            print::print_values(&session.get_roles());
            Ok(())
        }
        Some(Commands::Validate {
            first_name,
            last_name,
            email,
            department,
            role,
        }) => handle_validate(EmployeeForm {
            first_name,
            last_name,
            email,
            department,
            role,
        }),
        None => handle_list(&mut session, ListQuery::default()),
    }
}

fn init_session(seed_path: Option<&Path>) -> Result<DirectorySession> {
    let seed = match seed_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => default_seed()?,
    };
    Ok(DirectorySession::new(EmployeeStore::from_seed(seed)))
}

#[derive(Debug)]
struct ListQuery {
    search: Option<String>,
    department: Option<String>,
    role: Option<String>,
    sort: Option<SortField>,
    desc: bool,
    page: usize,
    per_page: usize,
    json: bool,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            department: None,
            role: None,
            sort: None,
            desc: false,
            page: 1,
            per_page: 10,
            json: false,
        }
    }
}

fn handle_list(session: &mut DirectorySession, query: ListQuery) -> Result<()> {
    if let Some(term) = query.search {
        session.set_search_filter(term);
    }
    if let Some(department) = query.department {
        session.set_department_filter(department);
    }
    if let Some(role) = query.role {
        session.set_role_filter(role);
    }
    if let Some(field) = query.sort {
        let order = if query.desc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        session.set_sort(field, order);
    }
    // Page navigation last: the setters above reset the page to 1.
    session.set_pagination(query.page, query.per_page);

    let page = session.get_employees();
    if query.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print::print_page(&page);
    }
    Ok(())
}

fn handle_show(session: &DirectorySession, id: u32, json: bool) -> Result<()> {
    let employee = session.get_by_id(id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&employee)?);
    } else {
        print::print_employee(&employee);
    }
    Ok(())
}

fn handle_validate(form: EmployeeForm) -> Result<()> {
    let report = validate_form(&form);
    print::print_report(&report);
    if !report.is_valid {
        std::process::exit(1);
    }
    Ok(())
}
