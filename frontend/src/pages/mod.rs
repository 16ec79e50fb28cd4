pub mod availability;
pub mod home;
pub mod homecare;
pub mod homecare_requests;
pub mod signin;
pub mod signup;
pub mod student_assigned;
pub mod student_requests;
pub mod students;
