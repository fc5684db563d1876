pub mod edit_teacher_modal;
pub mod header;
pub mod roster_toolbar;
pub mod teacher_fields;
pub mod teacher_form;
pub mod teacher_table;
