//! User-facing copy shown by the views.

pub const TODO_TITLE: &str = "Quản lý công việc";
pub const TODO_LOADING: &str = "Đang tải công việc...";
pub const TODO_BUSY: &str = "Đang xử lý...";
pub const INPUT_PLACEHOLDER: &str = "Nhập tên công việc";
pub const ADD_BUTTON: &str = "Thêm công việc";
pub const EMPTY_LIST: &str = "Không có công việc nào";

pub const FILTER_ALL: &str = "Tất cả";
pub const FILTER_COMPLETED: &str = "Hoàn thành";
pub const FILTER_ACTIVE: &str = "Đang thực hiện";

pub const DELETE_COMPLETED_BUTTON: &str = "Xóa công việc hoàn thành";
pub const DELETE_ALL_BUTTON: &str = "Xóa tất cả công việc";

// validation
pub const EMPTY_NAME: &str = "Tên công việc không được để trống";
pub const DUPLICATE_NAME: &str = "Tên công việc không được trùng";

// alerts
pub const ADDED: &str = "Thêm công việc thành công!";
pub const ADD_FAILED: &str = "Lỗi khi thêm công việc";
pub const UPDATED: &str = "Cập nhật công việc thành công!";
pub const UPDATE_FAILED: &str = "Lỗi khi cập nhật công việc";
pub const ALL_COMPLETED: &str = "Hoàn thành tất cả công việc! 🎉";
pub const DELETED_ONE: &str = "Đã xóa công việc!";
pub const DELETED_COMPLETED: &str = "Đã xóa tất cả công việc hoàn thành!";
pub const DELETED_ALL: &str = "Đã xóa tất cả công việc!";
pub const DELETE_FAILED: &str = "Lỗi khi xóa công việc";
pub const LOAD_FAILED: &str = "Lỗi khi tải dữ liệu";

// modals
pub const DELETE_ONE_TITLE: &str = "Xác nhận xóa công việc";
pub const DELETE_COMPLETED_TITLE: &str = "Xóa công việc hoàn thành";
pub const DELETE_ALL_TITLE: &str = "Xóa tất cả công việc";
pub const DELETE_TARGET_LABEL: &str = "Công việc sẽ bị xóa:";
pub const DELETE_ONE_BODY: &str =
    "Bạn có chắc muốn xóa công việc này không? Hành động này không thể hoàn tác.";
pub const EDIT_TITLE: &str = "Cập nhật công việc";
pub const CANCEL: &str = "Hủy";
pub const CONFIRM_DELETE: &str = "Xóa";

pub fn delete_completed_body(count: usize) -> String {
    format!("Bạn có chắc muốn xóa tất cả {count} công việc hoàn thành?")
}

pub fn delete_all_body(count: usize) -> String {
    format!("Bạn có chắc muốn xóa tất cả {count} công việc? Hành động này không thể hoàn tác.")
}
