pub mod u001_pos_home;
