//! 롤백 안내문. 실제 롤백은 수행하지 않는다.

pub fn rollback_steps(config: &str, number: &str) -> Vec<String> {
    vec![
        "1. Boot from a live USB of your distribution.".to_string(),
        "2. Mount your Btrfs root partition: sudo mount /dev/<root-partition> /mnt".to_string(),
        format!("3. Run: sudo snapper --config {config} rollback {number}"),
        "4. Update GRUB: sudo arch-chroot /mnt; grub-mkconfig -o /boot/grub/grub.cfg".to_string(),
        "5. Exit chroot (exit) and reboot.".to_string(),
    ]
}

pub fn rollback_title(number: &str) -> String {
    format!("Rollback Instructions for Snapshot {number}")
}
