pub mod branch_name;
